// Snapshot tests for the indentation markers over chat templates
// Guides are drawn as `|` (inactive) and `#` (active) in front of each line

use chatplate::document::Document;
use chatplate::markers::{
    IndentMarkers, LineDecoration, MarkerColor, MarkerConfig, MarkerTheme, visible_lines,
};
use chatplate::state::{EditorState, EditorView};

const CHAT_TEMPLATE: &[&str] = &[
    "{% for message in messages %}",
    "    {% if message['role'] == 'user' %}",
    "        {{ '<|user|>' + message['content'] }}",
    "",
    "    {% elif message['role'] == 'assistant' %}",
    "        {{ '<|assistant|>' + message['content'] }}",
    "    {% endif %}",
    "{% endfor %}",
    "",
    "{% if add_generation_prompt %}",
    "    {{ '<|assistant|>' }}",
    "{% endif %}",
];

/// Helper to draw the guides of one decoration as characters, one per indent stop
fn guides(decoration: Option<&LineDecoration>) -> String {
    let mut stops: Vec<char> = Vec::new();

    if let Some(decoration) = decoration {
        for layer in &decoration.layers {
            let ch = match layer.color {
                MarkerColor::Inactive => '|',
                MarkerColor::Active => '#',
            };
            for stop in layer.start..layer.start + layer.columns {
                if stops.len() <= stop {
                    stops.resize(stop + 1, ' ');
                }
                stops[stop] = ch;
            }
        }
    }

    stops.into_iter().collect()
}

/// Helper to render the visible lines of a view with their guides
fn draw(view: &EditorView, config: MarkerConfig) -> String {
    let markers = IndentMarkers::new(view, config, MarkerTheme::default());

    visible_lines(view)
        .iter()
        .map(|line| {
            let decoration = markers.decorations().iter().find(|d| d.line == line.number);
            format!(
                "{:02} {:<3} {}",
                line.number,
                guides(decoration),
                line.text.trim()
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn template_view(lines: &[&str], cursor_line: usize) -> EditorView {
    let state = EditorState::new(Document::from_lines(lines))
        .with_tab_size(4)
        .with_indent_unit(4)
        .with_cursor_on_line(cursor_line);
    EditorView::full(state)
}

fn plain() -> MarkerConfig {
    MarkerConfig {
        highlight_active_block: false,
        hide_first_indent: false,
    }
}

#[test]
fn test_chat_template_guides() {
    let view = template_view(CHAT_TEMPLATE, 1);
    insta::assert_snapshot!(draw(&view, plain()), @r#"
    01     {% for message in messages %}
    02 |   {% if message['role'] == 'user' %}
    03 ||  {{ '<|user|>' + message['content'] }}
    04 ||
    05 |   {% elif message['role'] == 'assistant' %}
    06 ||  {{ '<|assistant|>' + message['content'] }}
    07 |   {% endif %}
    08     {% endfor %}
    09
    10     {% if add_generation_prompt %}
    11 |   {{ '<|assistant|>' }}
    12     {% endif %}
    "#);
}

#[test]
fn test_chat_template_active_block() {
    // the cursor sits on the line opening the loop body
    let view = template_view(CHAT_TEMPLATE, 1);
    insta::assert_snapshot!(draw(&view, MarkerConfig::default()), @r#"
    01     {% for message in messages %}
    02 #   {% if message['role'] == 'user' %}
    03 #|  {{ '<|user|>' + message['content'] }}
    04 #|
    05 #   {% elif message['role'] == 'assistant' %}
    06 #|  {{ '<|assistant|>' + message['content'] }}
    07 #   {% endif %}
    08     {% endfor %}
    09
    10     {% if add_generation_prompt %}
    11 |   {{ '<|assistant|>' }}
    12     {% endif %}
    "#);
}

#[test]
fn test_chat_template_hidden_first_indent() {
    let view = template_view(CHAT_TEMPLATE, 3);
    let config = MarkerConfig {
        highlight_active_block: true,
        hide_first_indent: true,
    };
    insta::assert_snapshot!(draw(&view, config), @r#"
    01     {% for message in messages %}
    02     {% if message['role'] == 'user' %}
    03  #  {{ '<|user|>' + message['content'] }}
    04  #
    05     {% elif message['role'] == 'assistant' %}
    06  |  {{ '<|assistant|>' + message['content'] }}
    07     {% endif %}
    08     {% endfor %}
    09
    10     {% if add_generation_prompt %}
    11     {{ '<|assistant|>' }}
    12     {% endif %}
    "#);
}

#[test]
fn test_tab_indented_template() {
    let lines = [
        "{% for m in messages %}",
        "\t{% if m['role'] == 'system' %}",
        "\t\t{{ m['content'] }}",
        "",
        "",
        "\t{% endif %}",
        "{% endfor %}",
        "",
    ];
    let view = template_view(&lines, 1);
    insta::assert_snapshot!(draw(&view, plain()), @r#"
    01     {% for m in messages %}
    02 |   {% if m['role'] == 'system' %}
    03 ||  {{ m['content'] }}
    04 ||
    05 ||
    06 |   {% endif %}
    07     {% endfor %}
    08
    "#);
}

#[test]
fn test_partial_viewport_resolves_blank_lines_from_hidden_neighbours() {
    let mut view = template_view(CHAT_TEMPLATE, 1);
    let doc = &view.state.doc;
    let start = doc.line(4).unwrap().from;
    let end = doc.line(5).unwrap().to;
    view.visible_ranges = vec![start..end];

    insta::assert_snapshot!(draw(&view, plain()), @r#"
    04 ||
    05 |   {% elif message['role'] == 'assistant' %}
    "#);
}

#[test]
fn test_decoration_style_payload() {
    let view = template_view(CHAT_TEMPLATE, 1);
    let markers = IndentMarkers::new(&view, MarkerConfig::default(), MarkerTheme::default());
    let third = markers
        .decorations()
        .iter()
        .find(|d| d.line == 3)
        .unwrap();

    assert_eq!(LineDecoration::CLASS_NAME, "cm-indent-markers");
    assert_eq!(third.from, view.state.doc.line(3).unwrap().from);
    insta::assert_snapshot!(third.background, @"repeating-linear-gradient(to right, var(--indent-marker-active-bg-color) 0 1px, transparent 1px 4ch) 0.5ch/calc(4ch - 1px) no-repeat,repeating-linear-gradient(to right, var(--indent-marker-bg-color) 0 1px, transparent 1px 4ch) 4.5ch/calc(4ch - 1px) no-repeat");
    assert_eq!(third.style(), format!("--indent-markers: {}", third.background));
}

#[test]
fn test_base_stylesheet() {
    insta::assert_snapshot!(MarkerTheme::default().stylesheet(), @r#"
    .cm-light {
      --indent-marker-bg-color: #F0F1F2;
      --indent-marker-active-bg-color: #E4E5E6;
    }
    .cm-dark {
      --indent-marker-bg-color: #2B3245;
      --indent-marker-active-bg-color: #3C445C;
    }
    .cm-line {
      position: relative;
    }
    .cm-indent-markers::before {
      content: "";
      position: absolute;
      top: 0;
      left: 2px;
      right: 0;
      bottom: 0;
      background: var(--indent-markers);
      pointer-events: none;
    }
    "#);
}
