/**
Target platform selection for generated headers
*/
use clap::ValueEnum;
use vpi_bridge::header::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Linux,
    Macos,
    Windows,
}

impl PlatformArg {
    /// Platform this binary was built for
    pub fn host() -> Platform {
        Platform::from_target_os(std::env::consts::OS)
    }
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Linux => Platform::Linux,
            PlatformArg::Macos => Platform::Macos,
            PlatformArg::Windows => Platform::Windows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_arg_maps_to_header_platform() {
        assert_eq!(Platform::from(PlatformArg::Linux), Platform::Linux);
        assert_eq!(Platform::from(PlatformArg::Macos), Platform::Macos);
        assert_eq!(Platform::from(PlatformArg::Windows), Platform::Windows);
    }

    #[test]
    fn test_value_names() {
        let names: Vec<_> = PlatformArg::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();

        assert_eq!(names, vec!["linux", "macos", "windows"]);
    }
}
