//! Minimal `--flag value` lookups shared by the binaries.

/// Value following `flag`, if both are present.
pub fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Whether the bare switch `flag` was passed.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

/// `flag`'s value as a positive `u8`, or `default` when absent or unparsable.
pub fn arg_u8(args: &[String], flag: &str, default: u8) -> u8 {
    arg_value(args, flag)
        .and_then(|value| value.parse::<u8>().ok())
        .map_or(default, |value| value.max(1))
}
