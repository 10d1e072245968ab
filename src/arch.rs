use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// CPU architectures the syscall service knows calling conventions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Arch {
    #[value(name = "x86")]
    X86,
    #[value(name = "x64")]
    X64,
    #[value(name = "arm")]
    Arm,
    #[value(name = "arm64")]
    Arm64,
}

impl Arch {
    pub const ALL: [Arch; 4] = [Arch::X86, Arch::X64, Arch::Arm, Arch::Arm64];

    /// The token used in URLs and in the `arch` field of syscall records.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::X64 => "x64",
            Arch::Arm => "arm",
            Arch::Arm64 => "arm64",
        }
    }

    /// Returns true if an `arch` field value names this architecture.
    ///
    /// The service is not consistent about case, so the comparison ignores it.
    pub fn matches(self, value: &str) -> bool {
        value.eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arch::ALL
            .into_iter()
            .find(|arch| arch.matches(s))
            .ok_or_else(|| format!("unknown architecture '{s}' (expected x86, x64, arm or arm64)"))
    }
}
