//! Filter-graph builders for the edit operations.

use reel_models::{LowerThird, LowerThirdPosition, TransitionKind};
use std::path::Path;

/// Default font used for lower-third overlays.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Build the filter_complex graph joining two clips with a transition.
///
/// The fade style cross-fades by overlaying a fade-out of the first clip
/// with a fade-in of the second; the remaining styles use xfade. All
/// graphs emit their result on the `[outv]` label.
pub fn transition_filter(kind: TransitionKind, duration: f64) -> String {
    match kind {
        TransitionKind::Fade => format!(
            "[0:v]fade=t=out:st={d}:d={d}[v0];[1:v]fade=t=in:st=0:d={d}[v1];[v0][v1]overlay[outv]",
            d = duration
        ),
        TransitionKind::Dissolve => xfade_filter("fade", duration),
        TransitionKind::Wipe => xfade_filter("wiperight", duration),
        TransitionKind::Zoom => xfade_filter("zoomin", duration),
    }
}

fn xfade_filter(transition: &str, duration: f64) -> String {
    format!(
        "[0:v][1:v]xfade=transition={}:duration={}[outv]",
        transition, duration
    )
}

/// Build the drawtext filter overlaying a lower third.
///
/// The caption text is read from a file rather than inlined, so arbitrary
/// user text cannot break out of the filter expression.
pub fn lower_third_filter(spec: &LowerThird, text_file: &Path, font_path: &str) -> String {
    let y = match spec.position {
        LowerThirdPosition::Top => "20",
        LowerThirdPosition::Bottom => "h-60",
    };
    format!(
        "drawtext=fontfile={}:textfile={}:fontcolor=white:fontsize=24:\
         box=1:boxcolor=black@0.5:boxborderw=8:x=(w-text_w)/2:y={}:\
         enable='between(t,{},{})'",
        font_path,
        text_file.display(),
        y,
        spec.start_time,
        spec.start_time + spec.duration
    )
}

/// Build the scale filter for export resolution.
pub fn scale_filter(width: u32, height: u32) -> String {
    format!("scale={}:{}", width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_fade_uses_overlay_graph() {
        let filter = transition_filter(TransitionKind::Fade, 1.5);
        assert!(filter.contains("fade=t=out:st=1.5:d=1.5"));
        assert!(filter.contains("fade=t=in:st=0:d=1.5"));
        assert!(filter.contains("overlay[outv]"));
    }

    #[test]
    fn test_xfade_styles() {
        assert!(transition_filter(TransitionKind::Dissolve, 1.0)
            .contains("xfade=transition=fade:duration=1"));
        assert!(transition_filter(TransitionKind::Wipe, 1.0)
            .contains("xfade=transition=wiperight:duration=1"));
        assert!(transition_filter(TransitionKind::Zoom, 1.0)
            .contains("xfade=transition=zoomin:duration=1"));
    }

    #[test]
    fn test_all_transitions_emit_outv() {
        for kind in [
            TransitionKind::Fade,
            TransitionKind::Dissolve,
            TransitionKind::Wipe,
            TransitionKind::Zoom,
        ] {
            assert!(transition_filter(kind, 1.0).ends_with("[outv]"));
        }
    }

    #[test]
    fn test_lower_third_positions() {
        let text_file = PathBuf::from("/tmp/job/lower_third.txt");
        let mut spec = LowerThird {
            text: "Hello".to_string(),
            position: LowerThirdPosition::Top,
            duration: 5.0,
            start_time: 2.0,
        };

        let top = lower_third_filter(&spec, &text_file, DEFAULT_FONT_PATH);
        assert!(top.contains("y=20"));
        assert!(top.contains("enable='between(t,2,7)'"));
        assert!(top.contains("textfile=/tmp/job/lower_third.txt"));

        spec.position = LowerThirdPosition::Bottom;
        let bottom = lower_third_filter(&spec, &text_file, DEFAULT_FONT_PATH);
        assert!(bottom.contains("y=h-60"));
    }

    #[test]
    fn test_scale_filter() {
        assert_eq!(scale_filter(1920, 1080), "scale=1920:1080");
    }
}
