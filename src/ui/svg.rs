//! Standalone SVG document for one wave frame.

use crate::core::wave::{Viewbox, WaveFrame};

const BACK_FILL: &str = "#4fc3f7";
const FRONT_FILL: &str = "#0288d1";

pub fn document(frame: &WaveFrame, viewbox: &Viewbox) -> String {
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n",
            "  <path id=\"wave2\" fill=\"{back}\" fill-opacity=\"0.6\" d=\"{d2}\"/>\n",
            "  <path id=\"wave1\" fill=\"{front}\" d=\"{d1}\"/>\n",
            "</svg>\n"
        ),
        w = viewbox.width,
        h = viewbox.height,
        back = BACK_FILL,
        front = FRONT_FILL,
        d1 = frame.primary.to_svg_d(),
        d2 = frame.secondary.to_svg_d(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wave::WaveAnimator;

    #[test]
    fn document_contains_both_layers() {
        let anim = WaveAnimator::default();
        let frame = anim.frame(0.25);
        let svg = document(&frame, &anim.viewbox);

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("viewBox=\"0 0 375 375\""));
        assert!(svg.contains("id=\"wave1\""));
        assert!(svg.contains("id=\"wave2\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
