use crate::error::SetupError;

/// Pipeline stage an entry point belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    fn from_attribute(token: &str) -> Option<Self> {
        match token {
            "@vertex" => Some(Self::Vertex),
            "@fragment" => Some(Self::Fragment),
            "@compute" => Some(Self::Compute),
            _ => None,
        }
    }
}

/// WGSL source with named entry points, looked up by stage and name.
#[derive(Debug, Clone)]
pub struct ProgramLibrary {
    label: &'static str,
    source: &'static str,
    entries: Vec<(ShaderStage, String)>,
}

impl ProgramLibrary {
    /// The program library compiled into the crate.
    pub fn embedded() -> Self {
        Self::from_source("strip basic programs", include_str!("shaders/basic.wgsl"))
    }

    pub fn from_source(label: &'static str, source: &'static str) -> Self {
        Self {
            label,
            source,
            entries: scan_entry_points(source),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Resolves `name` as an entry point of `stage`.
    ///
    /// A missing or mis-staged program is a pipeline compilation failure.
    pub fn lookup(&self, stage: ShaderStage, name: &str) -> Result<&str, SetupError> {
        self.entries
            .iter()
            .find(|(s, n)| *s == stage && n == name)
            .map(|(_, n)| n.as_str())
            .ok_or_else(|| {
                SetupError::PipelineCompilation(format!(
                    "{:?} program `{name}` not found in `{}`",
                    stage, self.label
                ))
            })
    }
}

/// Collects `@stage ... fn name(` pairs from WGSL source.
///
/// Comments are skipped; other attributes between the stage attribute and
/// `fn` (e.g. `@workgroup_size(64)`) are tolerated.
fn scan_entry_points(source: &str) -> Vec<(ShaderStage, String)> {
    let mut entries = Vec::new();
    let mut pending: Option<ShaderStage> = None;
    let mut expect_name = false;

    let code = source.lines().map(|l| l.split("//").next().unwrap_or(""));
    for token in code.flat_map(str::split_whitespace) {
        if expect_name {
            let name: String = token
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if let (Some(stage), false) = (pending.take(), name.is_empty()) {
                entries.push((stage, name));
            }
            expect_name = false;
            continue;
        }

        if let Some(stage) = ShaderStage::from_attribute(token) {
            pending = Some(stage);
        } else if token == "fn" {
            expect_name = pending.is_some();
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_library_exposes_basic_programs() {
        let lib = ProgramLibrary::embedded();
        assert_eq!(lib.lookup(ShaderStage::Vertex, "basic_vertex").unwrap(), "basic_vertex");
        assert_eq!(lib.lookup(ShaderStage::Fragment, "basic_fragment").unwrap(), "basic_fragment");
    }

    #[test]
    fn missing_program_is_pipeline_error() {
        let lib = ProgramLibrary::embedded();
        let err = lib.lookup(ShaderStage::Vertex, "fancy_vertex").unwrap_err();
        assert!(matches!(err, SetupError::PipelineCompilation(_)));
        assert!(err.to_string().contains("fancy_vertex"));
    }

    #[test]
    fn wrong_stage_is_pipeline_error() {
        let lib = ProgramLibrary::embedded();
        assert!(lib.lookup(ShaderStage::Fragment, "basic_vertex").is_err());
    }

    #[test]
    fn helper_functions_are_not_entry_points() {
        let lib = ProgramLibrary::from_source(
            "test",
            "fn helper() -> f32 { return 1.0; }\n@compute @workgroup_size(64)\nfn main_cs() {}",
        );
        assert!(lib.lookup(ShaderStage::Compute, "helper").is_err());
        assert!(lib.lookup(ShaderStage::Compute, "main_cs").is_ok());
    }

    #[test]
    fn commented_out_entry_points_are_ignored() {
        let lib = ProgramLibrary::from_source("test", "// @vertex fn ghost() {}\n");
        assert!(lib.lookup(ShaderStage::Vertex, "ghost").is_err());
    }
}
