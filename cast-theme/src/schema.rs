//! # Theme Schema
//!
//! The typed, two-tier shape of a resolved theme.
//!
//! A [Theme] has a `name`, a **semantic** tier of design decisions (color
//! roles, type scale, spacing, radii, elevation, opacity) and a **component**
//! tier with one record per widget kind. Every field is a concrete number or
//! string; a theme never holds an unresolved token reference.
//!
//! Field names serialize in camelCase (`onSurface`, `textField`, `appBar`).
//! Every record also carries a flattened `extra` map so keys that overrides
//! add on top of the schema survive a round trip through the typed form.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use cast_tokens::{as_whole, is_alias};

use crate::error::{ThemeError, ThemeResult};

/// Declare a theme record.
///
/// Generates the struct with camelCase serialization and the flattened
/// `extra` map shared by every record.
macro_rules! token_record {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                #[doc = concat!("The `", stringify!($field), "` token.")]
                $(#[$field_meta])*
                pub $field: $ty,
            )*
            /// Keys outside the schema, written through by overrides.
            #[serde(flatten)]
            pub extra: Map<String, Value>,
        }
    };
}

token_record! {
    /// A fully resolved theme.
    Theme {
        name: String,
        semantic: SemanticTokens,
        component: ComponentTokens,
    }
}

// Semantic tier

token_record! {
    /// Design decisions shared by every component.
    SemanticTokens {
        color: SemanticColors,
        font_family: SemanticFontFamily,
        font_size: SemanticFontSize,
        font_weight: SemanticFontWeight,
        line_height: SemanticLineHeight,
        letter_spacing: SemanticLetterSpacing,
        paragraph_spacing: SemanticParagraphSpacing,
        paragraph_indent: SemanticParagraphIndent,
        border_radius: SemanticBorderRadius,
        spacing: SemanticSpacing,
        border_width: SemanticBorderWidth,
        elevation: SemanticElevation,
        size: SemanticSize,
        opacity: SemanticOpacity,
    }
}

token_record! {
    /// Color roles, as hex strings.
    SemanticColors {
        surface: String,
        on_surface: String,
        on_surface_muted: String,
        surface_container: String,
        primary: String,
        on_primary: String,
        primary_hover: String,
        primary_pressed: String,
        secondary: String,
        on_secondary: String,
        success: String,
        on_success: String,
        error: String,
        on_error: String,
        warning: String,
        on_warning: String,
        border: String,
        border_subtle: String,
        disabled_container: String,
        on_disabled: String,
        primary_container: String,
        on_primary_container: String,
        secondary_container: String,
        on_secondary_container: String,
        error_container: String,
        on_error_container: String,
        success_container: String,
        on_success_container: String,
        warning_container: String,
        on_warning_container: String,
        /// Scrim color behind modal surfaces.
        overlay: String,
    }
}

token_record! {
    /// Font family names.
    SemanticFontFamily {
        /// Brand typeface for headlines and marketing.
        brand: String,
        /// UI typeface for body text and controls.
        interface: String,
        /// Monospaced typeface for code and data.
        data: String,
    }
}

token_record! {
    /// Text sizes.
    SemanticFontSize {
        display: f64,
        h1: f64,
        h2: f64,
        h3: f64,
        body: f64,
        small: f64,
        button: f64,
    }
}

token_record! {
    /// Font weights.
    SemanticFontWeight {
        heading: f64,
        body: f64,
        button: f64,
    }
}

token_record! {
    /// Line heights.
    SemanticLineHeight {
        heading: f64,
        body: f64,
        ui_label: f64,
    }
}

token_record! {
    /// Letter spacing (tracking).
    SemanticLetterSpacing {
        heading: f64,
        body: f64,
        label: f64,
    }
}

token_record! {
    /// Space between paragraphs.
    SemanticParagraphSpacing {
        body: f64,
        editorial: f64,
    }
}

token_record! {
    /// First-line paragraph indents.
    SemanticParagraphIndent {
        editorial: f64,
    }
}

token_record! {
    /// Corner radii.
    SemanticBorderRadius {
        small: f64,
        medium: f64,
        large: f64,
        /// Pill shape.
        full: f64,
    }
}

token_record! {
    /// Spacing scale.
    SemanticSpacing {
        xs: f64,
        sm: f64,
        md: f64,
        lg: f64,
        xl: f64,
    }
}

token_record! {
    /// Stroke widths.
    SemanticBorderWidth {
        thin: f64,
        medium: f64,
    }
}

token_record! {
    /// Elevation levels.
    SemanticElevation {
        none: f64,
        xs: f64,
        sm: f64,
        md: f64,
        lg: f64,
        xl: f64,
    }
}

token_record! {
    /// Fixed sizes for controls and icons.
    SemanticSize {
        xs: f64,
        sm: f64,
        md: f64,
        lg: f64,
        xl: f64,
        xxl: f64,
        xxxl: f64,
    }
}

token_record! {
    /// Opacity levels.
    SemanticOpacity {
        disabled: f64,
        overlay: f64,
    }
}

// Component tier

token_record! {
    /// Per-widget visual tokens.
    ComponentTokens {
        button: ButtonTokens,
        card: CardTokens,
        text_field: TextFieldTokens,
        checkbox: CheckboxTokens,
        fab: FabTokens,
        autocomplete: AutocompleteTokens,
        select: SelectTokens,
        switch: SwitchTokens,
        badge: BadgeTokens,
        chip: ChipTokens,
        divider: DividerTokens,
        icon: IconTokens,
        table: TableTokens,
        alert: AlertTokens,
        backdrop: BackdropTokens,
        skeleton: SkeletonTokens,
        snackbar: SnackbarTokens,
        dialog: DialogTokens,
        app_bar: AppBarTokens,
        link: LinkTokens,
        speed_dial: SpeedDialTokens,
    }
}

token_record! {
    /// Colors of the filled and text button variants.
    ButtonVariantTokens {
        background: String,
        content: String,
    }
}

token_record! {
    /// Colors of the outline button variant.
    ButtonOutlineTokens {
        background: String,
        border: String,
        content: String,
    }
}

token_record! {
    /// Interaction state colors shared by all button variants.
    ButtonStateTokens {
        hover_background: String,
        pressed_background: String,
        disabled_background: String,
        disabled_content: String,
    }
}

token_record! {
    /// Button tokens.
    ButtonTokens {
        padding_horizontal: f64,
        padding_vertical: f64,
        gap: f64,
        corner_radius: f64,
        border_width: f64,
        text_size: f64,
        font_weight: f64,
        line_height: f64,
        font_family: String,
        filled: ButtonVariantTokens,
        outline: ButtonOutlineTokens,
        text: ButtonVariantTokens,
        state: ButtonStateTokens,
    }
}

token_record! {
    /// Card tokens.
    CardTokens {
        padding: f64,
        gap: f64,
        background: String,
        stroke: String,
        stroke_width: f64,
        corner_radius: f64,
        elevation: f64,
        heading_size: f64,
        heading_weight: f64,
        heading_font_family: String,
        heading_color: String,
        body_size: f64,
        body_weight: f64,
        body_font_family: String,
        body_color: String,
    }
}

token_record! {
    /// Text field tokens.
    TextFieldTokens {
        padding_horizontal: f64,
        padding_vertical: f64,
        corner_radius: f64,
        border_width: f64,
        background: String,
        border_color: String,
        focus_border_color: String,
        error_border_color: String,
        text_color: String,
        placeholder_color: String,
        text_size: f64,
        font_family: String,
        label_color: String,
        label_size: f64,
        helper_color: String,
        helper_size: f64,
        error_color: String,
    }
}

token_record! {
    /// Checkbox tokens.
    CheckboxTokens {
        size: f64,
        corner_radius: f64,
        border_width: f64,
        gap: f64,
        border_color: String,
        checked_background: String,
        checked_icon_color: String,
        label_color: String,
        label_size: f64,
        label_font_family: String,
        disabled_opacity: f64,
    }
}

token_record! {
    /// Floating action button tokens.
    FabTokens {
        size: f64,
        corner_radius: f64,
        background: String,
        icon_color: String,
        icon_size: f64,
        hover_background: String,
        pressed_background: String,
        elevation: f64,
        extended_padding_horizontal: f64,
        extended_gap: f64,
    }
}

token_record! {
    /// Autocomplete tokens.
    AutocompleteTokens {
        dropdown_background: String,
        dropdown_corner_radius: f64,
        dropdown_elevation: f64,
        option_hover_background: String,
        option_text_color: String,
        option_text_size: f64,
        option_padding_horizontal: f64,
        option_padding_vertical: f64,
        font_family: String,
    }
}

token_record! {
    /// Select tokens.
    SelectTokens {
        dropdown_background: String,
        dropdown_corner_radius: f64,
        dropdown_elevation: f64,
        option_hover_background: String,
        indicator_color: String,
        option_text_color: String,
        option_text_size: f64,
        option_padding_horizontal: f64,
        option_padding_vertical: f64,
        font_family: String,
        selected_option_background: String,
    }
}

token_record! {
    /// Switch tokens.
    SwitchTokens {
        track_width: f64,
        track_height: f64,
        track_corner_radius: f64,
        track_off_background: String,
        track_on_background: String,
        thumb_size: f64,
        thumb_corner_radius: f64,
        thumb_off_background: String,
        thumb_on_background: String,
        thumb_offset: f64,
        label_color: String,
        label_size: f64,
        label_font_family: String,
        gap: f64,
    }
}

token_record! {
    /// Badge tokens.
    BadgeTokens {
        min_size: f64,
        padding_horizontal: f64,
        corner_radius: f64,
        background: String,
        content_color: String,
        text_size: f64,
        font_weight: f64,
        font_family: String,
    }
}

token_record! {
    /// Chip tokens.
    ChipTokens {
        padding_horizontal: f64,
        padding_vertical: f64,
        gap: f64,
        corner_radius: f64,
        background: String,
        content_color: String,
        selected_background: String,
        selected_content_color: String,
        border_width: f64,
        border_color: String,
        text_size: f64,
        font_family: String,
    }
}

token_record! {
    /// Divider tokens.
    DividerTokens {
        color: String,
        thickness: f64,
        margin: f64,
    }
}

token_record! {
    /// Icon sizes.
    IconTokens {
        size_small: f64,
        size_medium: f64,
        size_large: f64,
    }
}

token_record! {
    /// Table tokens.
    TableTokens {
        header_background: String,
        header_text_color: String,
        header_font_weight: f64,
        header_text_size: f64,
        cell_text_color: String,
        cell_text_size: f64,
        cell_padding_horizontal: f64,
        cell_padding_vertical: f64,
        row_border_color: String,
        row_border_width: f64,
        row_hover_background: String,
        corner_radius: f64,
        font_family: String,
    }
}

token_record! {
    /// Alert tokens.
    AlertTokens {
        padding: f64,
        gap: f64,
        corner_radius: f64,
        border_width: f64,
        background: String,
        border_color: String,
        title_color: String,
        body_color: String,
        icon_color: String,
        font_family: String,
        icon_size: f64,
        title_size: f64,
        title_font_weight: f64,
        body_size: f64,
    }
}

token_record! {
    /// Backdrop tokens.
    BackdropTokens {
        color: String,
        opacity: f64,
    }
}

token_record! {
    /// Skeleton placeholder tokens.
    SkeletonTokens {
        background: String,
        highlight: String,
        corner_radius: f64,
        circle_size: f64,
    }
}

token_record! {
    /// Snackbar tokens.
    SnackbarTokens {
        background: String,
        content_color: String,
        action_color: String,
        padding: f64,
        gap: f64,
        corner_radius: f64,
        elevation: f64,
        text_size: f64,
        font_weight: f64,
        font_family: String,
    }
}

token_record! {
    /// Dialog tokens.
    DialogTokens {
        background: String,
        corner_radius: f64,
        padding: f64,
        gap: f64,
        elevation: f64,
        title_size: f64,
        title_font_weight: f64,
        title_font_family: String,
        title_color: String,
        body_size: f64,
        body_font_family: String,
        body_color: String,
    }
}

token_record! {
    /// App bar tokens.
    AppBarTokens {
        height: f64,
        padding_horizontal: f64,
        background: String,
        title_color: String,
        title_size: f64,
        title_font_weight: f64,
        title_font_family: String,
        icon_color: String,
        border_color: String,
        elevation: f64,
    }
}

token_record! {
    /// Link tokens.
    LinkTokens {
        color: String,
        hover_color: String,
        visited_color: String,
        underline_offset: f64,
        font_weight: f64,
    }
}

token_record! {
    /// Speed dial tokens.
    SpeedDialTokens {
        action_size: f64,
        action_background: String,
        action_icon_color: String,
        action_icon_size: f64,
        action_corner_radius: f64,
        gap: f64,
        action_elevation: f64,
    }
}

impl Theme {
    /// Build a typed theme from its value form.
    ///
    /// Fails with [ThemeError::UnresolvedAlias] if any string still uses the
    /// `{…}` reference syntax, and with [ThemeError::Shape] if a schema field
    /// is missing or has the wrong type.
    pub fn from_value(value: Value) -> ThemeResult<Self> {
        ensure_resolved(&value)?;
        serde_json::from_value(value).map_err(|e| ThemeError::shape(e.to_string()))
    }

    /// The value form of this theme: a nested object with camelCase keys.
    ///
    /// Whole numbers are written as integers (`12`, not `12.0`).
    pub fn to_value(&self) -> ThemeResult<Value> {
        let mut value = serde_json::to_value(self).map_err(|e| ThemeError::Serialization(e.to_string()))?;
        compact_numbers(&mut value);
        Ok(value)
    }

    /// Parse a theme from JSON content.
    pub fn from_json_str(content: &str) -> ThemeResult<Self> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ThemeError::parse_error("<json>", e.to_string()))?;
        Self::from_value(value)
    }

    /// Parse a theme from TOML content, such as a generated `.theme.toml`.
    pub fn from_toml_str(content: &str) -> ThemeResult<Self> {
        let value: Value =
            toml::from_str(content).map_err(|e| ThemeError::parse_error("<toml>", e.to_string()))?;
        Self::from_value(value)
    }

    /// Load a theme from a `.json` or `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        let value = read_document(path)?;
        log::debug!("Loaded theme from {:?}", path);
        Self::from_value(value)
    }
}

/// Read a JSON or TOML document into its value form, picking the parser by
/// file extension.
pub(crate) fn read_document(path: &Path) -> ThemeResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| ThemeError::read_error(path, e))?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| ThemeError::parse_error(path, e.to_string())),
        Some("toml") => toml::from_str(&content).map_err(|e| ThemeError::parse_error(path, e.to_string())),
        _ => Err(ThemeError::unsupported_format(path)),
    }
}

/// Rewrite every whole floating point number in `value` as an integer.
fn compact_numbers(value: &mut Value) {
    let whole = if value.is_f64() {
        value.as_f64().and_then(as_whole)
    } else {
        None
    };
    if let Some(whole) = whole {
        *value = Value::from(whole);
        return;
    }

    match value {
        Value::Object(map) => map.values_mut().for_each(compact_numbers),
        Value::Array(items) => items.iter_mut().for_each(compact_numbers),
        _ => {},
    }
}

/// Check that no string anywhere in `value` uses the alias syntax.
pub fn ensure_resolved(value: &Value) -> ThemeResult<()> {
    find_alias(value, &mut Vec::new())
}

fn find_alias(value: &Value, trail: &mut Vec<String>) -> ThemeResult<()> {
    match value {
        Value::String(text) if is_alias(text) => Err(ThemeError::UnresolvedAlias {
            field: trail.join("."),
            value: text.clone(),
        }),
        Value::Object(map) => {
            for (key, child) in map {
                trail.push(key.clone());
                find_alias(child, trail)?;
                trail.pop();
            }
            Ok(())
        },
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                trail.push(index.to_string());
                find_alias(child, trail)?;
                trail.pop();
            }
            Ok(())
        },
        _ => Ok(()),
    }
}
