use crate::EngineError;

/// Compiles a WGSL module and checks the compiler's messages.
///
/// Error-level messages are fatal and returned as `EngineError::ShaderCompile`
/// with the full message log; warnings are logged and the module is kept.
pub fn compile_wgsl(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, EngineError> {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    let diagnostics: Vec<Diagnostic> = info.messages.iter().map(Diagnostic::from).collect();

    if diagnostics.iter().any(|d| d.is_error) {
        return Err(EngineError::ShaderCompile {
            label: label.to_string(),
            log: format_log(&diagnostics),
        });
    }

    if !diagnostics.is_empty() {
        log::warn!("shader `{label}` compiled with warnings:\n{}", format_log(&diagnostics));
    }

    Ok(module)
}

/// Backend-independent view of one compilation message.
#[derive(Debug, Clone, PartialEq)]
struct Diagnostic {
    is_error: bool,
    /// 1-based line and column.
    location: Option<(u32, u32)>,
    message: String,
}

impl From<&wgpu::CompilationMessage> for Diagnostic {
    fn from(m: &wgpu::CompilationMessage) -> Self {
        Self {
            is_error: matches!(m.message_type, wgpu::CompilationMessageType::Error),
            location: m.location.as_ref().map(|l| (l.line_number, l.line_position)),
            message: m.message.clone(),
        }
    }
}

fn format_log(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| {
            let severity = if d.is_error { "error" } else { "warning" };
            match d.location {
                Some((line, col)) => format!("{severity} at {line}:{col}: {}", d.message),
                None => format!("{severity}: {}", d.message),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
