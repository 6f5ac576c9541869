//! Tile presentation.
//!
//! [`render`] is a pure function of its props: the same props always give the
//! same [`TileView`]. Supplying an [`Activation`] turns the passive `<span>`
//! into a `<button>`; nothing else about the visuals changes.

use std::fmt;

use strum::EnumIter;

use crate::asset::AssetCatalog;
use crate::tile::TileId;

pub const DEFAULT_WIDTH_PX: u32 = 40;

/// Vertical offset applied to a selected tile.
const SELECTED_LIFT: &str = "translateY(-2px)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum TileState {
    #[default]
    Normal,
    Selected,
    Hint,
    Disabled,
    Danger,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn from_degrees(deg: u16) -> Option<Self> {
        match deg {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

/// What happens when an interactive tile is activated.
#[derive(Clone, Copy)]
pub enum Activation<'a> {
    Callback(&'a dyn Fn()),
    /// The host page submits `name=value` with the enclosing form.
    Submit { name: &'a str, value: &'a str },
}

impl fmt::Debug for Activation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Callback(_) => f.write_str("Callback(..)"),
            Activation::Submit { name, value } => f
                .debug_struct("Submit")
                .field("name", name)
                .field("value", value)
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TileProps<'a> {
    pub tile: TileId,
    pub width_px: u32,
    pub state: TileState,
    pub rotation: Rotation,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub activation: Option<Activation<'a>>,
    pub disabled: bool,
}

impl<'a> TileProps<'a> {
    pub fn new(tile: TileId) -> Self {
        Self {
            tile,
            width_px: DEFAULT_WIDTH_PX,
            state: TileState::Normal,
            rotation: Rotation::Deg0,
            alt: None,
            title: None,
            activation: None,
            disabled: false,
        }
    }

    pub fn width(mut self, px: u32) -> Self {
        self.width_px = px;
        self
    }

    pub fn state(mut self, state: TileState) -> Self {
        self.state = state;
        self
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn on_activate(mut self, f: &'a dyn Fn()) -> Self {
        self.activation = Some(Activation::Callback(f));
        self
    }

    pub fn submit(mut self, name: &'a str, value: &'a str) -> Self {
        self.activation = Some(Activation::Submit { name, value });
        self
    }

    pub fn force_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Button,
    Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineTone {
    Warning,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Highlight,
    Outline(OutlineTone),
}

impl Overlay {
    fn for_state(state: TileState) -> Self {
        match state {
            TileState::Hint => Overlay::Highlight,
            TileState::Danger => Overlay::Outline(OutlineTone::Warning),
            TileState::Selected => Overlay::Outline(OutlineTone::Neutral),
            TileState::Normal | TileState::Disabled => Overlay::None,
        }
    }
}

/// Rotation first, then the selected lift. `None` when neither applies.
pub fn compute_transform(rotation: Rotation, state: TileState) -> Option<String> {
    let rot = (rotation != Rotation::Deg0).then(|| format!("rotate({}deg)", rotation.degrees()));
    let lift = (state == TileState::Selected).then_some(SELECTED_LIFT);
    match (rot, lift) {
        (Some(rot), Some(lift)) => Some(format!("{rot} {lift}")),
        (Some(rot), None) => Some(rot),
        (None, Some(lift)) => Some(lift.to_string()),
        (None, None) => None,
    }
}

#[derive(Debug, Clone)]
pub struct TileView<'a> {
    pub element: Element,
    pub src: String,
    pub alt: String,
    pub title: Option<String>,
    pub width_px: u32,
    pub state: TileState,
    pub disabled: bool,
    pub overlay: Overlay,
    pub transform: Option<String>,
    activation: Option<Activation<'a>>,
}

pub fn render<'a>(props: &TileProps<'a>, catalog: &AssetCatalog) -> TileView<'a> {
    let disabled = props.disabled || props.state == TileState::Disabled;
    let element = if props.activation.is_some() {
        Element::Button
    } else {
        Element::Span
    };

    TileView {
        element,
        src: catalog.url_for(props.tile).to_string(),
        alt: props.alt.clone().unwrap_or_else(|| props.tile.to_string()),
        title: props.title.clone(),
        width_px: props.width_px,
        state: props.state,
        disabled,
        overlay: Overlay::for_state(props.state),
        transform: compute_transform(props.rotation, props.state),
        activation: props.activation,
    }
}

impl TileView<'_> {
    pub fn is_interactive(&self) -> bool {
        self.element == Element::Button
    }

    /// One user activation. Returns whether a handler ran.
    pub fn activate(&self) -> bool {
        if self.disabled {
            return false;
        }
        match self.activation {
            Some(Activation::Callback(f)) => {
                f();
                true
            }
            _ => false,
        }
    }

    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["tile"];
        if self.is_interactive() {
            classes.push("tile--button");
        }
        if self.disabled {
            classes.push("tile--disabled");
        }
        match self.overlay {
            Overlay::Highlight => classes.push("tile--hint"),
            Overlay::Outline(OutlineTone::Warning) => classes.push("tile--danger"),
            Overlay::Outline(OutlineTone::Neutral) => classes.push("tile--selected"),
            Overlay::None => {}
        }
        classes
    }

    pub fn to_html(&self) -> String {
        let tag = match self.element {
            Element::Button => "button",
            Element::Span => "span",
        };

        let mut out = format!("<{tag}");
        match self.activation {
            Some(Activation::Submit { name, value }) => out.push_str(&format!(
                r#" type="submit" name="{}" value="{}""#,
                escape(name),
                escape(value)
            )),
            Some(Activation::Callback(_)) => out.push_str(r#" type="button""#),
            None => {}
        }
        out.push_str(&format!(r#" class="{}""#, self.classes().join(" ")));
        out.push_str(&format!(r#" style="width:{}px"#, self.width_px));
        if let Some(transform) = &self.transform {
            out.push_str(";transform:");
            out.push_str(transform);
        }
        out.push('"');
        if let Some(title) = &self.title {
            out.push_str(&format!(r#" title="{}""#, escape(title)));
        }
        out.push_str(&format!(r#" aria-disabled="{}""#, self.disabled));
        if self.is_interactive() && self.disabled {
            out.push_str(" disabled");
        }
        out.push_str(&format!(
            r#"><img src="{}" alt="{}" loading="lazy" decoding="async" draggable="false"></{tag}>"#,
            escape(&self.src),
            escape(&self.alt)
        ));
        out
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub const TILE_CSS: &str = r#"
.tile {
  display: inline-block;
  position: relative;
  padding: 0;
  border: 0;
  background: transparent;
  line-height: 0;
}
.tile > img {
  display: block;
  width: 100%;
  height: auto;
  user-select: none;
  -webkit-user-drag: none;
}
.tile::after {
  content: "";
  position: absolute;
  inset: 0;
  border-radius: 10px;
  pointer-events: none;
  opacity: 0;
}
.tile--button { cursor: pointer; }
.tile--button:disabled { cursor: not-allowed; }
.tile--disabled {
  cursor: not-allowed;
  opacity: 0.85;
  filter: saturate(0.2) brightness(0.85);
}
.tile--hint::after {
  opacity: 1;
  background: rgba(255, 255, 255, 0.18);
}
.tile--danger::after {
  opacity: 1;
  outline: 2px solid rgba(255, 80, 80, 0.9);
  outline-offset: -2px;
}
.tile--selected::after {
  opacity: 1;
  outline: 2px solid rgba(255, 255, 255, 0.9);
  outline-offset: -2px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn catalog() -> &'static AssetCatalog {
        AssetCatalog::standard()
    }

    #[test]
    fn transform_order_and_omission() {
        assert_eq!(compute_transform(Rotation::Deg0, TileState::Normal), None);
        assert_eq!(
            compute_transform(Rotation::Deg0, TileState::Selected).as_deref(),
            Some("translateY(-2px)")
        );
        assert_eq!(
            compute_transform(Rotation::Deg270, TileState::Hint).as_deref(),
            Some("rotate(270deg)")
        );
        assert_eq!(
            compute_transform(Rotation::Deg90, TileState::Selected).as_deref(),
            Some("rotate(90deg) translateY(-2px)")
        );
    }

    #[test]
    fn hint_without_handler_is_passive_highlight() {
        let props = TileProps::new(TileId::classify("9s")).state(TileState::Hint);
        let view = render(&props, catalog());

        assert_eq!(view.element, Element::Span);
        assert!(!view.is_interactive());
        assert_eq!(view.overlay, Overlay::Highlight);
        assert!(!view.activate());

        let html = view.to_html();
        assert!(html.starts_with(r#"<span class="tile tile--hint" style="width:40px""#));
        assert!(html.contains(r#"src="/assets/tiles/svg/Sou9.svg""#));
        assert!(!html.contains("transform"));
    }

    #[test]
    fn selected_rotated_button_fires_once_per_activation() {
        let hits = Cell::new(0);
        let handler = || hits.set(hits.get() + 1);
        let props = TileProps::new(TileId::classify("白"))
            .state(TileState::Selected)
            .rotation(Rotation::Deg90)
            .on_activate(&handler);
        let view = render(&props, catalog());

        assert!(view.is_interactive());
        assert_eq!(view.overlay, Overlay::Outline(OutlineTone::Neutral));
        assert_eq!(
            view.transform.as_deref(),
            Some("rotate(90deg) translateY(-2px)")
        );

        assert!(view.activate());
        assert_eq!(hits.get(), 1);
        assert!(view.activate());
        assert_eq!(hits.get(), 2);

        let html = view.to_html();
        assert!(html.starts_with(r#"<button type="button""#));
        assert!(html.contains("transform:rotate(90deg) translateY(-2px)"));
        assert!(html.contains(r#"aria-disabled="false""#));
        assert!(!html.contains(" disabled"));
    }

    #[test]
    fn force_disabled_suppresses_activation() {
        let hits = Cell::new(0);
        let handler = || hits.set(hits.get() + 1);
        let props = TileProps::new(TileId::classify("3m"))
            .on_activate(&handler)
            .force_disabled(true);
        let view = render(&props, catalog());

        assert!(view.is_interactive());
        assert!(view.disabled);
        assert!(!view.activate());
        assert_eq!(hits.get(), 0);

        let html = view.to_html();
        assert!(html.contains("tile--disabled"));
        assert!(html.contains(r#"aria-disabled="true" disabled>"#));
    }

    #[test]
    fn disabled_state_counts_as_disabled() {
        let hits = Cell::new(0);
        let handler = || hits.set(hits.get() + 1);
        let props = TileProps::new(TileId::Back)
            .state(TileState::Disabled)
            .on_activate(&handler);
        let view = render(&props, catalog());

        assert!(view.disabled);
        assert_eq!(view.overlay, Overlay::None);
        assert!(!view.activate());
        assert_eq!(view.classes(), vec!["tile", "tile--button", "tile--disabled"]);
    }

    #[test]
    fn passive_tile_still_reports_disabled() {
        let view = render(
            &TileProps::new(TileId::Blank).state(TileState::Disabled),
            catalog(),
        );
        let html = view.to_html();
        assert!(html.starts_with("<span"));
        assert!(html.contains(r#"aria-disabled="true""#));
        assert!(!html.contains(" disabled>"));
    }

    #[test]
    fn danger_outline() {
        let view = render(
            &TileProps::new(TileId::classify("南")).state(TileState::Danger),
            catalog(),
        );
        assert_eq!(view.overlay, Overlay::Outline(OutlineTone::Warning));
        assert_eq!(view.classes(), vec!["tile", "tile--danger"]);
    }

    #[test]
    fn alt_defaults_to_token_and_text_is_escaped() {
        let view = render(&TileProps::new(TileId::classify("0p")), catalog());
        assert_eq!(view.alt, "0p");

        let view = render(
            &TileProps::new(TileId::classify("1m"))
                .alt("one <man>")
                .title(r#"say "hi""#),
            catalog(),
        );
        let html = view.to_html();
        assert!(html.contains(r#"alt="one &lt;man&gt;""#));
        assert!(html.contains(r#"title="say &quot;hi&quot;""#));
    }

    #[test]
    fn submit_activation_renders_form_button() {
        let view = render(
            &TileProps::new(TileId::classify("7s"))
                .width(32)
                .submit("pick", "4"),
            catalog(),
        );
        assert!(view.is_interactive());
        assert!(!view.activate());
        assert!(view
            .to_html()
            .starts_with(r#"<button type="submit" name="pick" value="4" class="tile tile--button" style="width:32px""#));
    }

    #[test]
    fn render_is_idempotent() {
        let props = TileProps::new(TileId::classify("0m"))
            .state(TileState::Selected)
            .rotation(Rotation::Deg180)
            .title("red five");
        let a = render(&props, catalog()).to_html();
        let b = render(&props, catalog()).to_html();
        assert_eq!(a, b);
    }

    #[test]
    fn rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(180), Some(Rotation::Deg180));
        assert_eq!(Rotation::from_degrees(45), None);
    }
}
