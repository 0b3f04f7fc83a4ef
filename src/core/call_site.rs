//! Call-site metadata for header rendering

use std::panic::Location;

/// Location of a logging call, captured statically.
///
/// The logging macros fill all three fields from `file!()`, `line!()` and
/// `module_path!()`. The plain methods capture file and line through
/// `#[track_caller]`; wrappers that should stay transparent annotate
/// themselves with `#[track_caller]` as well, or pass an explicit site to
/// `log_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub module: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, module: &'static str) -> Self {
        Self { file, line, module }
    }

    /// Capture the caller's file and line. The module is unknown outside a
    /// macro expansion and is left empty.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            module: "",
        }
    }

    /// File name without its directory components
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }

    /// Last segment of the module path, empty when no module was captured
    pub fn scope(&self) -> &'static str {
        self.module.rsplit("::").next().unwrap_or(self.module)
    }
}
