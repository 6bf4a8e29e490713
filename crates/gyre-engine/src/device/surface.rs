use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// Picks the surface format whose sRGB encoding matches `prefer_srgb`.
///
/// Vertex colours are linear; an sRGB target encodes them on write. Without a
/// matching format the first supported one is used and colours shift.
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if let Some(format) = caps.formats.iter().copied().find(|f| f.is_srgb() == prefer_srgb) {
        return Some(format);
    }

    let fallback = caps.formats.first().copied()?;
    log::warn!(
        "no {} surface format offered; using {fallback:?}, colours will be off",
        if prefer_srgb { "sRGB" } else { "linear" },
    );
    Some(fallback)
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Updates the stored size and reconfigures; a 0x0 size defers configuration.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;

    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            log::debug!("surface {err:?}; reconfigured");
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => {
            log::error!("surface out of memory");
            SurfaceErrorAction::Fatal
        }
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => {
            log::warn!("surface {err:?}; skipping frame");
            SurfaceErrorAction::SkipFrame
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, SurfaceCapabilities, TextureFormat};

    fn caps(formats: &[TextureFormat], alpha_modes: &[CompositeAlphaMode]) -> SurfaceCapabilities {
        SurfaceCapabilities {
            formats: formats.to_vec(),
            alpha_modes: alpha_modes.to_vec(),
            ..Default::default()
        }
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn srgb_preferred_over_earlier_linear_format() {
        let c = caps(&[TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb], &[]);
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn linear_preference_skips_srgb() {
        let c = caps(&[TextureFormat::Bgra8UnormSrgb, TextureFormat::Rgba8Unorm], &[]);
        assert_eq!(choose_surface_format(&c, false), Some(TextureFormat::Rgba8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        let c = caps(&[TextureFormat::Rgba16Float], &[]);
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Rgba16Float));
    }

    #[test]
    fn no_formats_yields_none() {
        assert_eq!(choose_surface_format(&caps(&[], &[]), true), None);
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn supported_alpha_request_is_kept() {
        let c = caps(&[], &[CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied]);
        let got = choose_alpha_mode(&c, Some(CompositeAlphaMode::PreMultiplied));
        assert_eq!(got, CompositeAlphaMode::PreMultiplied);
    }

    #[test]
    fn unsupported_alpha_request_falls_back() {
        let c = caps(&[], &[CompositeAlphaMode::Opaque]);
        let got = choose_alpha_mode(&c, Some(CompositeAlphaMode::PostMultiplied));
        assert_eq!(got, CompositeAlphaMode::Opaque);
        assert_eq!(choose_alpha_mode(&caps(&[], &[]), None), CompositeAlphaMode::Auto);
    }
}
