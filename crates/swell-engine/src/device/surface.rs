use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

/// First sRGB format when `prefer_srgb`, else the adapter's first choice.
/// `None` if the surface reports no formats at all.
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let srgb = prefer_srgb
        .then(|| caps.formats.iter().copied().find(|f| f.is_srgb()))
        .flatten();
    srgb.or_else(|| caps.formats.first().copied())
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    match requested {
        Some(m) if caps.alpha_modes.contains(&m) => m,
        _ => caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
    }
}

/// Decides what a failed `get_current_texture` means for this frame.
///
/// Lost and outdated surfaces are reconfigured in place unless the window
/// is minimized; the depth target keeps its size since `size` is unchanged.
pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    let action = classify(&err);
    if action == SurfaceErrorAction::Reconfigured && size.width > 0 && size.height > 0 {
        surface.configure(device, config);
    }
    match action {
        SurfaceErrorAction::Fatal => log::error!("surface error: {err}"),
        _ => log::debug!("surface error: {err}; {action:?}"),
    }
    action
}

fn classify(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, SurfaceCapabilities, TextureFormat};

    fn caps(formats: Vec<TextureFormat>, alpha_modes: Vec<CompositeAlphaMode>) -> SurfaceCapabilities {
        SurfaceCapabilities {
            formats,
            alpha_modes,
            ..SurfaceCapabilities::default()
        }
    }

    #[test]
    fn srgb_preferred_when_offered() {
        let c = caps(vec![TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb], vec![]);
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&c, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        let c = caps(vec![TextureFormat::Rgba16Float], vec![]);
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Rgba16Float));
        assert_eq!(choose_surface_format(&caps(vec![], vec![]), true), None);
    }

    #[test]
    fn unsupported_alpha_request_is_ignored() {
        let c = caps(vec![], vec![CompositeAlphaMode::Opaque]);
        assert_eq!(choose_alpha_mode(&c, Some(CompositeAlphaMode::PreMultiplied)), CompositeAlphaMode::Opaque);
        assert_eq!(choose_alpha_mode(&caps(vec![], vec![]), None), CompositeAlphaMode::Auto);
    }

    #[test]
    fn only_out_of_memory_is_fatal() {
        assert_eq!(classify(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
