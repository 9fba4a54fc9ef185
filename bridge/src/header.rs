/*!
C Header Rendering - declarations the host binding compiles against

This file is shared with `build.rs`, so it must only depend on `std`.

The kernel's `vpi_user.h` assumes some system typedefs are already visible.
On Linux that means `<sys/types.h>` has to come first. The choice is made
here per target platform instead of with `#ifdef` in the header itself.
*/

/// Kernel interface header the generated header pulls in
pub const KERNEL_HEADER: &str = "iverilog/vpi_user.h";

/// Include guard for the generated header
pub const INCLUDE_GUARD: &str = "VPI_BRIDGE_H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Macos,
    Windows,
    Other,
}

impl Platform {
    /// Map a `target_os` value (as cargo reports it) to a platform
    pub fn from_target_os(target_os: &str) -> Self {
        match target_os {
            "linux" | "android" => Platform::Linux,
            "macos" | "ios" => Platform::Macos,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    /// System headers that must be included before the kernel header
    pub fn prerequisite_includes(self) -> &'static [&'static str] {
        match self {
            Platform::Linux => &["sys/types.h"],
            Platform::Macos | Platform::Windows | Platform::Other => &[],
        }
    }
}

/// One exported C symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Export {
    pub name: &'static str,
    pub prototype: &'static str,
    pub doc: &'static str,
}

/// Every symbol the bridge exports, in header order
pub const EXPORTS: &[Export] = &[
    Export {
        name: "vpi_bridge_init",
        prototype: "int32_t vpi_bridge_init(void);",
        doc: "Bind the simulator. Runs at module load; returns 0, or a negative error code.",
    },
    Export {
        name: "vpi_finish",
        prototype: "void vpi_finish(void);",
        doc: "Ask the running simulation to finish. Call at most once per run.",
    },
    Export {
        name: "vpi_stop",
        prototype: "void vpi_stop(void);",
        doc: "Ask the running simulation to pause (interactive stop).",
    },
    Export {
        name: "vpi_bridge_message",
        prototype: "int32_t vpi_bridge_message(const uint8_t *text, size_t len);",
        doc: "Print UTF-8 text through the kernel. Returns 0, or a negative error code.",
    },
];

/// Render the header for `platform`
pub fn render(platform: Platform) -> String {
    let prerequisites: String = platform
        .prerequisite_includes()
        .iter()
        .map(|include| format!("#include <{include}>\n"))
        .collect();

    let prototypes: String = EXPORTS
        .iter()
        .map(|export| format!("\n/* {} */\n{}\n", export.doc, export.prototype))
        .collect();

    format!(
        "/* Generated by vpi-bridge. Do not edit. */
#ifndef {INCLUDE_GUARD}
#define {INCLUDE_GUARD}

{prerequisites}#include <stddef.h>
#include <stdint.h>
#include <{KERNEL_HEADER}>

#ifdef __cplusplus
extern \"C\" {{
#endif
{prototypes}
#ifdef __cplusplus
}}
#endif

#endif /* {INCLUDE_GUARD} */
"
    )
}
