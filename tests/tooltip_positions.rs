// Scenario tests for tooltip placement around anchors in a desktop and a phone viewport

use chatplate::geometry::{Rect, Viewport};
use chatplate::tooltip::{
    Alignment, FloatingPosition, Placement, PositionOptions, compute_alignment, compute_placement,
    compute_position,
};

const ANCHORS: &[(&str, Rect)] = &[
    ("top-left corner", Rect { left: 100.0, top: 50.0, width: 80.0, height: 20.0 }),
    ("below the fold", Rect { left: 450.0, top: 600.0, width: 80.0, height: 20.0 }),
    ("right edge", Rect { left: 900.0, top: 300.0, width: 60.0, height: 20.0 }),
    ("centered", Rect { left: 460.0, top: 380.0, width: 80.0, height: 24.0 }),
];

fn declarations(position: &chatplate::tooltip::AbsolutePosition) -> String {
    position
        .declarations()
        .iter()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Helper to describe where a 200x40 tooltip lands for every anchor
fn describe(placement: Placement) -> String {
    let float = Rect::sized(200.0, 40.0);
    let viewport = Viewport::new(1000.0, 800.0);
    let options = PositionOptions {
        placement,
        ..PositionOptions::default()
    };
    let hit_zone = options.hit_zone();

    ANCHORS
        .iter()
        .map(|(name, anchor)| {
            let side = compute_placement(anchor, &float, placement, &viewport, hit_zone);
            let alignment = compute_alignment(
                anchor,
                &float,
                options.alignment,
                placement.axis(),
                &viewport,
                hit_zone,
            );
            let position = compute_position(anchor, &float, &viewport, &options);
            format!(
                "{name}: {side}/{alignment}\n  float {}\n  arrow {}",
                declarations(&position.float),
                declarations(&position.arrow)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_default_options_scenario() {
    let anchor = Rect::new(100.0, 50.0, 80.0, 20.0);
    let float = Rect::sized(200.0, 40.0);
    let viewport = Viewport::new(1000.0, 800.0);
    let options = PositionOptions::default();

    // 50 is not above 40 + 20, so there is no room on top
    assert_eq!(
        compute_placement(&anchor, &float, options.placement, &viewport, options.hit_zone()),
        Placement::Bottom
    );

    let position = compute_position(&anchor, &float, &viewport, &options);
    insta::assert_snapshot!(serde_json::to_string_pretty(&position).unwrap(), @r#"
    {
      "float": {
        "left": "26px",
        "top": "calc(100% + 8px)",
        "right": "auto",
        "bottom": ""
      },
      "arrow": {
        "left": "10px",
        "top": "",
        "right": "",
        "bottom": "calc(100% - 4px)"
      }
    }
    "#);
}

#[test]
fn test_prefer_top_scenarios() {
    insta::assert_snapshot!(describe(Placement::PreferTop), @r"
    top-left corner: bottom/start
      float top: calc(100% + 8px); right: auto; left: 26px
      arrow bottom: calc(100% - 4px); left: 10px
    below the fold: top/center
      float right: auto; bottom: calc(100% + 8px); left: -60px
      arrow top: calc(100% - 4px); left: calc(50% - 4px)
    right edge: top/end
      float right: 16px; bottom: calc(100% + 8px); left: auto
      arrow top: calc(100% - 4px); right: 10px
    centered: top/center
      float right: auto; bottom: calc(100% + 8px); left: -60px
      arrow top: calc(100% - 4px); left: calc(50% - 4px)
    ");
}

#[test]
fn test_auto_scenarios() {
    insta::assert_snapshot!(describe(Placement::Auto), @r"
    top-left corner: bottom/start
      float top: calc(100% + 8px); right: auto; left: 26px
      arrow bottom: calc(100% - 4px); left: 10px
    below the fold: top/center
      float right: auto; bottom: calc(100% + 8px); left: -60px
      arrow top: calc(100% - 4px); left: calc(50% - 4px)
    right edge: bottom/end
      float top: calc(100% + 8px); right: 16px; left: auto
      arrow right: 10px; bottom: calc(100% - 4px)
    centered: bottom/center
      float top: calc(100% + 8px); right: auto; left: -60px
      arrow bottom: calc(100% - 4px); left: calc(50% - 4px)
    ");
}

#[test]
fn test_prefer_left_scenarios() {
    insta::assert_snapshot!(describe(Placement::PreferLeft), @r"
    top-left corner: right/center
      float top: -10px; left: calc(100% + 8px)
      arrow top: calc(50% - 4px); left: -4px
    below the fold: left/center
      float top: -10px; right: calc(100% + 8px)
      arrow top: calc(50% - 4px); right: -4px
    right edge: left/center
      float top: -10px; right: calc(100% + 8px)
      arrow top: calc(50% - 4px); right: -4px
    centered: left/center
      float top: -8px; right: calc(100% + 8px)
      arrow top: calc(50% - 4px); right: -4px
    ");
}

#[test]
fn test_phone_viewport_switches_to_screen() {
    let anchor = Rect::new(30.0, 200.0, 40.0, 20.0);
    let float = Rect::sized(340.0, 60.0);
    let viewport = Viewport::new(375.0, 667.0);

    let FloatingPosition { float: popover, arrow } =
        compute_position(&anchor, &float, &viewport, &PositionOptions::default());

    assert_eq!(popover.left, "-20px");
    assert_eq!(popover.right, "auto");
    assert_eq!(popover.bottom, "calc(100% + 8px)");
    assert_eq!(arrow.left, "36px");
    assert_eq!(arrow.top, "calc(100% - 4px)");

    // the same float on a desktop-sized viewport keeps the preferred alignment
    let desktop = Viewport::new(1000.0, 800.0);
    assert_eq!(
        compute_alignment(
            &anchor,
            &float,
            Alignment::PreferCenter,
            Placement::PreferTop.axis(),
            &desktop,
            PositionOptions::default().hit_zone(),
        ),
        Alignment::Start
    );
}

#[test]
fn test_partial_options_from_json() {
    let options: PositionOptions =
        serde_json::from_str(r#"{ "placement": "left", "alignment": "end", "shift": false }"#)
            .unwrap();
    assert_eq!(options.placement, Placement::Left);
    assert_eq!(options.alignment, Alignment::End);
    assert!(!options.shift);
    assert_eq!(options.arrow_size, 8.0);
    assert_eq!(options.min_margin, 10.0);
}

#[test]
fn test_repositioning_is_stable() {
    let anchor = Rect::new(640.0, 420.0, 120.0, 32.0);
    let float = Rect::sized(260.0, 90.0);
    let viewport = Viewport::new(1280.0, 720.0).with_scroll(0.0, 300.0);
    let options = PositionOptions::default();

    let first = compute_position(&anchor, &float, &viewport, &options);
    for _ in 0..5 {
        assert_eq!(compute_position(&anchor, &float, &viewport, &options), first);
    }
}
