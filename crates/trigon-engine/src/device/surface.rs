//! Surface configuration choices, kept free of live GPU objects so they can be tested.

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    if prefer_srgb {
        if let Some(f) = formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    } else if let Some(f) = formats.iter().copied().find(|f| !f.is_srgb()) {
        return Some(f);
    }

    Some(first)
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

pub(crate) fn choose_present_mode(
    supported: &[wgpu::PresentMode],
    requested: wgpu::PresentMode,
) -> wgpu::PresentMode {
    if supported.contains(&requested) {
        requested
    } else {
        log::warn!("present mode {requested:?} unsupported; falling back to Fifo");
        wgpu::PresentMode::Fifo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, PresentMode, TextureFormat as Fmt};

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn srgb_preferred_when_available() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Bgra8UnormSrgb));
    }

    #[test]
    fn linear_preferred_when_srgb_not_wanted() {
        let formats = [Fmt::Bgra8UnormSrgb, Fmt::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [Fmt::Rgba16Float];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Rgba16Float));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── alpha / present ───────────────────────────────────────────────────

    #[test]
    fn unsupported_alpha_request_uses_first_supported() {
        let supported = [Alpha::Opaque, Alpha::PreMultiplied];
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PostMultiplied)), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PreMultiplied)), Alpha::PreMultiplied);
        assert_eq!(choose_alpha_mode(&[], None), Alpha::Auto);
    }

    #[test]
    fn unsupported_present_mode_falls_back_to_fifo() {
        let supported = [PresentMode::Fifo];
        assert_eq!(choose_present_mode(&supported, PresentMode::Mailbox), PresentMode::Fifo);
        assert_eq!(choose_present_mode(&supported, PresentMode::Fifo), PresentMode::Fifo);
    }
}
