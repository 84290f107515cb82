//! The schema field table.
//!
//! [THEME_FIELDS] lists every leaf of a [Theme](crate::Theme) exactly once,
//! with where its value comes from: a token path in the source tree, another
//! field of the theme, or a constant. Field names are camelCase dot paths
//! into the theme's value form.

use cast_tokens::ResolvedValue;

/// The kind of value a sourced field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A number.
    Number,
    /// A string (hex color, font family).
    Text,
}

impl ValueKind {
    /// Check whether a resolved value has this kind.
    pub fn matches(self, value: &ResolvedValue) -> bool {
        matches!(
            (self, value),
            (ValueKind::Number, ResolvedValue::Number(_)) | (ValueKind::Text, ResolvedValue::Text(_))
        )
    }

    /// Name used in diagnostics, matching [ResolvedValue::kind_name].
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Text => "string",
        }
    }
}

/// How a derived field obtains its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derivation {
    /// Copy the value of another theme field.
    Field(&'static str),
    /// A fixed number.
    Constant(f64),
}

/// Where a field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSource {
    /// Resolved from a token path in the source tree.
    Sourced {
        /// Dot path of the token.
        path: &'static str,
        /// Expected kind of the resolved value.
        kind: ValueKind,
    },
    /// Computed from already resolved theme values.
    Derived(Derivation),
}

/// The two tiers of a theme, in assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// `semantic.*` fields.
    Semantic,
    /// `component.*` fields.
    Component,
}

/// One leaf of the theme schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Dot path of the field in the theme, e.g. `semantic.color.primary`.
    pub field: &'static str,
    /// Where the value comes from.
    pub source: FieldSource,
}

impl FieldSpec {
    /// A field resolved from a token that must be a string.
    pub const fn text(field: &'static str, path: &'static str) -> Self {
        Self {
            field,
            source: FieldSource::Sourced {
                path,
                kind: ValueKind::Text,
            },
        }
    }

    /// A field resolved from a token that must be a number.
    pub const fn number(field: &'static str, path: &'static str) -> Self {
        Self {
            field,
            source: FieldSource::Sourced {
                path,
                kind: ValueKind::Number,
            },
        }
    }

    /// A field copied from another theme field.
    pub const fn copy(field: &'static str, from: &'static str) -> Self {
        Self {
            field,
            source: FieldSource::Derived(Derivation::Field(from)),
        }
    }

    /// A field with a fixed numeric value.
    pub const fn constant(field: &'static str, value: f64) -> Self {
        Self {
            field,
            source: FieldSource::Derived(Derivation::Constant(value)),
        }
    }

    /// The tier this field belongs to, taken from its first path segment.
    pub fn tier(&self) -> Tier {
        if self.field.starts_with("semantic.") {
            Tier::Semantic
        } else {
            Tier::Component
        }
    }

    /// Whether this field is resolved from the token tree.
    pub fn is_sourced(&self) -> bool {
        matches!(self.source, FieldSource::Sourced { .. })
    }
}

use self::FieldSpec as F;

/// Every leaf field of the theme schema.
pub static THEME_FIELDS: &[FieldSpec] = &[
    // Semantic colors
    F::text("semantic.color.surface", "Semantic.Colour.Surface"),
    F::text("semantic.color.onSurface", "Semantic.Colour.On-Surface"),
    F::text("semantic.color.onSurfaceMuted", "Semantic.Colour.On-Surface-Muted"),
    F::text("semantic.color.surfaceContainer", "Semantic.Colour.Surface-Container"),
    F::text("semantic.color.primary", "Semantic.Colour.Primary"),
    F::text("semantic.color.onPrimary", "Semantic.Colour.On-Primary"),
    F::text("semantic.color.primaryHover", "Semantic.Colour.Primary-Hover"),
    F::text("semantic.color.primaryPressed", "Semantic.Colour.Primary-Pressed"),
    F::text("semantic.color.secondary", "Semantic.Colour.Secondary"),
    F::text("semantic.color.onSecondary", "Semantic.Colour.On-Secondary"),
    F::text("semantic.color.success", "Semantic.Colour.Success"),
    F::text("semantic.color.onSuccess", "Semantic.Colour.On-Success"),
    F::text("semantic.color.error", "Semantic.Colour.Error"),
    F::text("semantic.color.onError", "Semantic.Colour.On-Error"),
    F::text("semantic.color.warning", "Semantic.Colour.Warning"),
    F::text("semantic.color.onWarning", "Semantic.Colour.On-Warning"),
    F::text("semantic.color.border", "Semantic.Colour.Border"),
    F::text("semantic.color.borderSubtle", "Semantic.Colour.Border-Subtle"),
    F::text("semantic.color.disabledContainer", "Semantic.Colour.Disabled-Container"),
    F::text("semantic.color.onDisabled", "Semantic.Colour.On-Disabled"),
    F::text("semantic.color.primaryContainer", "Semantic.Colour.Primary-Container"),
    F::text("semantic.color.onPrimaryContainer", "Semantic.Colour.On-Primary-Container"),
    F::text("semantic.color.secondaryContainer", "Semantic.Colour.Secondary-Container"),
    F::text("semantic.color.onSecondaryContainer", "Semantic.Colour.On-Secondary-Container"),
    F::text("semantic.color.errorContainer", "Semantic.Colour.Error-Container"),
    F::text("semantic.color.onErrorContainer", "Semantic.Colour.On-Error-Container"),
    F::text("semantic.color.successContainer", "Semantic.Colour.Success-Container"),
    F::text("semantic.color.onSuccessContainer", "Semantic.Colour.On-Success-Container"),
    F::text("semantic.color.warningContainer", "Semantic.Colour.Warning-Container"),
    F::text("semantic.color.onWarningContainer", "Semantic.Colour.On-Warning-Container"),
    F::text("semantic.color.overlay", "Primitive.Colour.Black"),
    // Typography
    F::text("semantic.fontFamily.brand", "Semantic.Font family.Font-Brand"),
    F::text("semantic.fontFamily.interface", "Semantic.Font family.Font-Interface"),
    F::text("semantic.fontFamily.data", "Semantic.Font family.Font-Data"),
    F::number("semantic.fontSize.display", "Semantic.Text size.Text-size-display"),
    F::number("semantic.fontSize.h1", "Semantic.Text size.Text-size-h1"),
    F::number("semantic.fontSize.h2", "Semantic.Text size.Text-size-h2"),
    F::number("semantic.fontSize.h3", "Semantic.Text size.Text-size-h3"),
    F::number("semantic.fontSize.body", "Semantic.Text size.Text-size-body"),
    F::number("semantic.fontSize.small", "Semantic.Text size.Text-size-small"),
    F::number("semantic.fontSize.button", "Semantic.Text size.Text-size-button"),
    F::number("semantic.fontWeight.heading", "Semantic.Font weight.Weight-heading"),
    F::number("semantic.fontWeight.body", "Semantic.Font weight.Weight-body"),
    F::number("semantic.fontWeight.button", "Semantic.Font weight.Weight-button"),
    F::number("semantic.lineHeight.heading", "Semantic.Line height.Line-Height-heading"),
    F::number("semantic.lineHeight.body", "Semantic.Line height.Line-Height-body"),
    F::number("semantic.lineHeight.uiLabel", "Semantic.Line height.Line-Height-UI-label"),
    F::number("semantic.letterSpacing.heading", "Semantic.Letter spacing.Tracking-heading"),
    F::number("semantic.letterSpacing.body", "Semantic.Letter spacing.Tracking-body"),
    F::number("semantic.letterSpacing.label", "Semantic.Letter spacing.Tracking-label"),
    F::number("semantic.paragraphSpacing.body", "Semantic.Paragraph spacing.Para-body"),
    F::number("semantic.paragraphSpacing.editorial", "Semantic.Paragraph spacing.Para-editorial"),
    F::number("semantic.paragraphIndent.editorial", "Semantic.Paragraph indent.Indent-editorial"),
    // Shape and layout
    F::number("semantic.borderRadius.small", "Semantic.Border radius.Radius-Small"),
    F::number("semantic.borderRadius.medium", "Semantic.Border radius.Radius-Medium"),
    F::number("semantic.borderRadius.large", "Semantic.Border radius.Radius-Large"),
    F::number("semantic.borderRadius.full", "Primitive.Border radius.Radius-Full"),
    F::number("semantic.spacing.xs", "Primitive.Spacing.050"),
    F::number("semantic.spacing.sm", "Primitive.Spacing.100"),
    F::number("semantic.spacing.md", "Primitive.Spacing.150"),
    F::number("semantic.spacing.lg", "Primitive.Spacing.200"),
    F::number("semantic.spacing.xl", "Primitive.Spacing.300"),
    F::constant("semantic.borderWidth.thin", 1.0),
    F::number("semantic.borderWidth.medium", "Primitive.Spacing.025"),
    F::constant("semantic.elevation.none", 0.0),
    F::constant("semantic.elevation.xs", 1.0),
    F::constant("semantic.elevation.sm", 2.0),
    F::constant("semantic.elevation.md", 3.0),
    F::constant("semantic.elevation.lg", 4.0),
    F::constant("semantic.elevation.xl", 6.0),
    F::number("semantic.size.xs", "Primitive.Spacing.025"),
    F::number("semantic.size.sm", "Primitive.Spacing.050"),
    F::number("semantic.size.md", "Primitive.Spacing.200"),
    F::number("semantic.size.lg", "Primitive.Spacing.300"),
    F::number("semantic.size.xl", "Primitive.Spacing.400"),
    F::number("semantic.size.xxl", "Primitive.Spacing.600"),
    F::number("semantic.size.xxxl", "Primitive.Spacing.800"),
    F::constant("semantic.opacity.disabled", 0.4),
    F::constant("semantic.opacity.overlay", 0.5),
    // Button
    F::number("component.button.paddingHorizontal", "Component.Button.Padding-Horizontal"),
    F::number("component.button.paddingVertical", "Component.Button.Padding-Vertical"),
    F::number("component.button.gap", "Component.Button.Gap"),
    F::number("component.button.cornerRadius", "Component.Button.Corner-Radius"),
    F::number("component.button.borderWidth", "Component.Button.Border-Width"),
    F::number("component.button.textSize", "Component.Button.Text-Size"),
    F::number("component.button.fontWeight", "Component.Button.Font-Weight"),
    F::number("component.button.lineHeight", "Component.Button.Line-Height"),
    F::text("component.button.fontFamily", "Component.Button.Font-Family"),
    F::text("component.button.filled.background", "Component.Button.Filled.Background"),
    F::text("component.button.filled.content", "Component.Button.Filled.Content"),
    F::text("component.button.outline.background", "Component.Button.Outline.Background"),
    F::text("component.button.outline.border", "Component.Button.Outline.Border"),
    F::text("component.button.outline.content", "Component.Button.Outline.Content"),
    F::text("component.button.text.background", "Component.Button.Text.Background"),
    F::text("component.button.text.content", "Component.Button.Text.Content"),
    F::text("component.button.state.hoverBackground", "Component.Button.State.Hover-Background"),
    F::text("component.button.state.pressedBackground", "Component.Button.State.Pressed-Background"),
    F::text("component.button.state.disabledBackground", "Component.Button.State.Disabled-Background"),
    F::text("component.button.state.disabledContent", "Component.Button.State.Disabled-Content"),
    // Card
    F::number("component.card.padding", "Component.Card.Padding"),
    F::number("component.card.gap", "Component.Card.Gap"),
    F::text("component.card.background", "Component.Card.Background"),
    F::text("component.card.stroke", "Component.Card.Stroke"),
    F::number("component.card.strokeWidth", "Component.Card.Stroke-Width"),
    F::number("component.card.cornerRadius", "Component.Card.Corner-Radius"),
    F::number("component.card.elevation", "Component.Card.Elevation"),
    F::number("component.card.headingSize", "Component.Card.Heading-Size"),
    F::number("component.card.headingWeight", "Component.Card.Heading-Weight"),
    F::text("component.card.headingFontFamily", "Component.Card.Heading-Font-Family"),
    F::copy("component.card.headingColor", "semantic.color.onSurface"),
    F::number("component.card.bodySize", "Component.Card.Body-Size"),
    F::number("component.card.bodyWeight", "Component.Card.Body-Weight"),
    F::text("component.card.bodyFontFamily", "Component.Card.Body-Font-Family"),
    F::copy("component.card.bodyColor", "semantic.color.onSurfaceMuted"),
    // Text field
    F::copy("component.textField.paddingHorizontal", "semantic.spacing.md"),
    F::copy("component.textField.paddingVertical", "semantic.spacing.sm"),
    F::copy("component.textField.cornerRadius", "semantic.borderRadius.medium"),
    F::copy("component.textField.borderWidth", "semantic.borderWidth.medium"),
    F::copy("component.textField.background", "semantic.color.surface"),
    F::copy("component.textField.borderColor", "semantic.color.border"),
    F::copy("component.textField.focusBorderColor", "semantic.color.primary"),
    F::copy("component.textField.errorBorderColor", "semantic.color.error"),
    F::copy("component.textField.textColor", "semantic.color.onSurface"),
    F::copy("component.textField.placeholderColor", "semantic.color.onSurfaceMuted"),
    F::copy("component.textField.textSize", "semantic.fontSize.body"),
    F::copy("component.textField.fontFamily", "semantic.fontFamily.interface"),
    F::copy("component.textField.labelColor", "semantic.color.onSurface"),
    F::copy("component.textField.labelSize", "semantic.fontSize.small"),
    F::copy("component.textField.helperColor", "semantic.color.onSurfaceMuted"),
    F::copy("component.textField.helperSize", "semantic.fontSize.small"),
    F::copy("component.textField.errorColor", "semantic.color.error"),
    // Checkbox
    F::copy("component.checkbox.size", "semantic.size.md"),
    F::copy("component.checkbox.cornerRadius", "semantic.borderRadius.small"),
    F::copy("component.checkbox.borderWidth", "semantic.borderWidth.medium"),
    F::copy("component.checkbox.gap", "semantic.spacing.sm"),
    F::copy("component.checkbox.borderColor", "semantic.color.border"),
    F::copy("component.checkbox.checkedBackground", "semantic.color.primary"),
    F::copy("component.checkbox.checkedIconColor", "semantic.color.onPrimary"),
    F::copy("component.checkbox.labelColor", "semantic.color.onSurface"),
    F::copy("component.checkbox.labelSize", "semantic.fontSize.body"),
    F::copy("component.checkbox.labelFontFamily", "semantic.fontFamily.interface"),
    F::copy("component.checkbox.disabledOpacity", "semantic.opacity.disabled"),
    // Floating action button
    F::copy("component.fab.size", "semantic.size.xxl"),
    F::copy("component.fab.cornerRadius", "semantic.borderRadius.full"),
    F::copy("component.fab.background", "semantic.color.primary"),
    F::copy("component.fab.iconColor", "semantic.color.onPrimary"),
    F::copy("component.fab.iconSize", "semantic.size.lg"),
    F::copy("component.fab.hoverBackground", "semantic.color.primaryHover"),
    F::copy("component.fab.pressedBackground", "semantic.color.primaryPressed"),
    F::copy("component.fab.elevation", "semantic.elevation.lg"),
    F::copy("component.fab.extendedPaddingHorizontal", "semantic.spacing.lg"),
    F::copy("component.fab.extendedGap", "semantic.spacing.sm"),
    // Autocomplete
    F::copy("component.autocomplete.dropdownBackground", "semantic.color.surface"),
    F::copy("component.autocomplete.dropdownCornerRadius", "semantic.borderRadius.medium"),
    F::copy("component.autocomplete.dropdownElevation", "semantic.elevation.sm"),
    F::copy("component.autocomplete.optionHoverBackground", "semantic.color.surfaceContainer"),
    F::copy("component.autocomplete.optionTextColor", "semantic.color.onSurface"),
    F::copy("component.autocomplete.optionTextSize", "semantic.fontSize.body"),
    F::copy("component.autocomplete.optionPaddingHorizontal", "semantic.spacing.lg"),
    F::copy("component.autocomplete.optionPaddingVertical", "semantic.spacing.sm"),
    F::copy("component.autocomplete.fontFamily", "semantic.fontFamily.interface"),
    // Select
    F::copy("component.select.dropdownBackground", "semantic.color.surface"),
    F::copy("component.select.dropdownCornerRadius", "semantic.borderRadius.medium"),
    F::copy("component.select.dropdownElevation", "semantic.elevation.sm"),
    F::copy("component.select.optionHoverBackground", "semantic.color.surfaceContainer"),
    F::copy("component.select.indicatorColor", "semantic.color.onSurfaceMuted"),
    F::copy("component.select.optionTextColor", "semantic.color.onSurface"),
    F::copy("component.select.optionTextSize", "semantic.fontSize.body"),
    F::copy("component.select.optionPaddingHorizontal", "semantic.spacing.lg"),
    F::copy("component.select.optionPaddingVertical", "semantic.spacing.sm"),
    F::copy("component.select.fontFamily", "semantic.fontFamily.interface"),
    F::copy("component.select.selectedOptionBackground", "semantic.color.primaryContainer"),
    // Switch
    F::copy("component.switch.trackWidth", "semantic.size.xxl"),
    F::copy("component.switch.trackHeight", "semantic.size.lg"),
    F::copy("component.switch.trackCornerRadius", "semantic.borderRadius.full"),
    F::copy("component.switch.trackOffBackground", "semantic.color.border"),
    F::copy("component.switch.trackOnBackground", "semantic.color.primary"),
    F::copy("component.switch.thumbSize", "semantic.size.md"),
    F::copy("component.switch.thumbCornerRadius", "semantic.borderRadius.full"),
    F::copy("component.switch.thumbOffBackground", "semantic.color.surface"),
    F::copy("component.switch.thumbOnBackground", "semantic.color.surface"),
    F::copy("component.switch.thumbOffset", "semantic.spacing.xs"),
    F::copy("component.switch.labelColor", "semantic.color.onSurface"),
    F::copy("component.switch.labelSize", "semantic.fontSize.body"),
    F::copy("component.switch.labelFontFamily", "semantic.fontFamily.interface"),
    F::copy("component.switch.gap", "semantic.spacing.sm"),
    // Badge
    F::copy("component.badge.minSize", "semantic.size.md"),
    F::copy("component.badge.paddingHorizontal", "semantic.spacing.xs"),
    F::copy("component.badge.cornerRadius", "semantic.borderRadius.full"),
    F::copy("component.badge.background", "semantic.color.error"),
    F::copy("component.badge.contentColor", "semantic.color.onError"),
    F::copy("component.badge.textSize", "semantic.fontSize.small"),
    F::copy("component.badge.fontWeight", "semantic.fontWeight.button"),
    F::copy("component.badge.fontFamily", "semantic.fontFamily.interface"),
    // Chip
    F::copy("component.chip.paddingHorizontal", "semantic.spacing.md"),
    F::copy("component.chip.paddingVertical", "semantic.spacing.xs"),
    F::copy("component.chip.gap", "semantic.spacing.xs"),
    F::copy("component.chip.cornerRadius", "semantic.borderRadius.small"),
    F::copy("component.chip.background", "semantic.color.surfaceContainer"),
    F::copy("component.chip.contentColor", "semantic.color.onSecondaryContainer"),
    F::copy("component.chip.selectedBackground", "semantic.color.primaryContainer"),
    F::copy("component.chip.selectedContentColor", "semantic.color.onPrimaryContainer"),
    F::copy("component.chip.borderWidth", "semantic.borderWidth.medium"),
    F::copy("component.chip.borderColor", "semantic.color.border"),
    F::copy("component.chip.textSize", "semantic.fontSize.small"),
    F::copy("component.chip.fontFamily", "semantic.fontFamily.interface"),
    // Divider
    F::copy("component.divider.color", "semantic.color.border"),
    F::copy("component.divider.thickness", "semantic.borderWidth.thin"),
    F::copy("component.divider.margin", "semantic.spacing.sm"),
    // Icon
    F::copy("component.icon.sizeSmall", "semantic.size.md"),
    F::copy("component.icon.sizeMedium", "semantic.size.lg"),
    F::copy("component.icon.sizeLarge", "semantic.size.xl"),
    // Table
    F::copy("component.table.headerBackground", "semantic.color.surfaceContainer"),
    F::copy("component.table.headerTextColor", "semantic.color.onSurface"),
    F::copy("component.table.headerFontWeight", "semantic.fontWeight.heading"),
    F::copy("component.table.headerTextSize", "semantic.fontSize.small"),
    F::copy("component.table.cellTextColor", "semantic.color.onSurface"),
    F::copy("component.table.cellTextSize", "semantic.fontSize.body"),
    F::copy("component.table.cellPaddingHorizontal", "semantic.spacing.md"),
    F::copy("component.table.cellPaddingVertical", "semantic.spacing.sm"),
    F::copy("component.table.rowBorderColor", "semantic.color.surfaceContainer"),
    F::copy("component.table.rowBorderWidth", "semantic.borderWidth.thin"),
    F::copy("component.table.rowHoverBackground", "semantic.color.surfaceContainer"),
    F::copy("component.table.cornerRadius", "semantic.borderRadius.medium"),
    F::copy("component.table.fontFamily", "semantic.fontFamily.interface"),
    // Alert
    F::copy("component.alert.padding", "semantic.spacing.lg"),
    F::copy("component.alert.gap", "semantic.spacing.sm"),
    F::copy("component.alert.cornerRadius", "semantic.borderRadius.medium"),
    F::copy("component.alert.borderWidth", "semantic.borderWidth.medium"),
    F::copy("component.alert.background", "semantic.color.surfaceContainer"),
    F::copy("component.alert.borderColor", "semantic.color.border"),
    F::copy("component.alert.titleColor", "semantic.color.onSurface"),
    F::copy("component.alert.bodyColor", "semantic.color.onSurface"),
    F::copy("component.alert.iconColor", "semantic.color.onSurface"),
    F::copy("component.alert.fontFamily", "semantic.fontFamily.interface"),
    F::copy("component.alert.iconSize", "semantic.size.lg"),
    F::copy("component.alert.titleSize", "semantic.fontSize.body"),
    F::copy("component.alert.titleFontWeight", "semantic.fontWeight.heading"),
    F::copy("component.alert.bodySize", "semantic.fontSize.small"),
    // Backdrop
    F::copy("component.backdrop.color", "semantic.color.overlay"),
    F::copy("component.backdrop.opacity", "semantic.opacity.overlay"),
    // Skeleton
    F::copy("component.skeleton.background", "semantic.color.surfaceContainer"),
    F::copy("component.skeleton.highlight", "semantic.color.surfaceContainer"),
    F::copy("component.skeleton.cornerRadius", "semantic.borderRadius.small"),
    F::copy("component.skeleton.circleSize", "semantic.size.xl"),
    // Snackbar
    F::copy("component.snackbar.background", "semantic.color.primary"),
    F::copy("component.snackbar.contentColor", "semantic.color.onPrimary"),
    F::copy("component.snackbar.actionColor", "semantic.color.primaryHover"),
    F::copy("component.snackbar.padding", "semantic.spacing.lg"),
    F::copy("component.snackbar.gap", "semantic.spacing.sm"),
    F::copy("component.snackbar.cornerRadius", "semantic.borderRadius.medium"),
    F::copy("component.snackbar.elevation", "semantic.elevation.md"),
    F::copy("component.snackbar.textSize", "semantic.fontSize.body"),
    F::copy("component.snackbar.fontWeight", "semantic.fontWeight.body"),
    F::copy("component.snackbar.fontFamily", "semantic.fontFamily.interface"),
    // Dialog
    F::copy("component.dialog.background", "semantic.color.surface"),
    F::copy("component.dialog.cornerRadius", "semantic.borderRadius.large"),
    F::copy("component.dialog.padding", "semantic.spacing.xl"),
    F::copy("component.dialog.gap", "semantic.spacing.lg"),
    F::copy("component.dialog.elevation", "semantic.elevation.xl"),
    F::copy("component.dialog.titleSize", "semantic.fontSize.h3"),
    F::copy("component.dialog.titleFontWeight", "semantic.fontWeight.heading"),
    F::copy("component.dialog.titleFontFamily", "semantic.fontFamily.interface"),
    F::copy("component.dialog.titleColor", "semantic.color.onSurface"),
    F::copy("component.dialog.bodySize", "semantic.fontSize.body"),
    F::copy("component.dialog.bodyFontFamily", "semantic.fontFamily.interface"),
    F::copy("component.dialog.bodyColor", "semantic.color.onSurface"),
    // App bar
    F::copy("component.appBar.height", "semantic.size.xxxl"),
    F::copy("component.appBar.paddingHorizontal", "semantic.spacing.lg"),
    F::copy("component.appBar.background", "semantic.color.surface"),
    F::copy("component.appBar.titleColor", "semantic.color.onSurface"),
    F::copy("component.appBar.titleSize", "semantic.fontSize.h3"),
    F::copy("component.appBar.titleFontWeight", "semantic.fontWeight.heading"),
    F::copy("component.appBar.titleFontFamily", "semantic.fontFamily.interface"),
    F::copy("component.appBar.iconColor", "semantic.color.onSurface"),
    F::copy("component.appBar.borderColor", "semantic.color.borderSubtle"),
    F::copy("component.appBar.elevation", "semantic.elevation.none"),
    // Link
    F::copy("component.link.color", "semantic.color.primary"),
    F::copy("component.link.hoverColor", "semantic.color.primaryHover"),
    F::copy("component.link.visitedColor", "semantic.color.onSurfaceMuted"),
    F::copy("component.link.underlineOffset", "semantic.size.xs"),
    F::copy("component.link.fontWeight", "semantic.fontWeight.body"),
    // Speed dial
    F::copy("component.speedDial.actionSize", "semantic.size.xl"),
    F::copy("component.speedDial.actionBackground", "semantic.color.surfaceContainer"),
    F::copy("component.speedDial.actionIconColor", "semantic.color.onSurface"),
    F::copy("component.speedDial.actionIconSize", "semantic.size.lg"),
    F::copy("component.speedDial.actionCornerRadius", "semantic.borderRadius.full"),
    F::copy("component.speedDial.gap", "semantic.spacing.sm"),
    F::copy("component.speedDial.actionElevation", "semantic.elevation.sm"),
];

/// Look up a field of [THEME_FIELDS] by its dot path.
pub fn field_spec(field: &str) -> Option<&'static FieldSpec> {
    THEME_FIELDS.iter().find(|spec| spec.field == field)
}

/// Every token path the schema reads from a source tree, without repeats.
pub fn required_token_paths() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Vec::new();
    for spec in THEME_FIELDS {
        if let FieldSource::Sourced { path, .. } = spec.source {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fields_are_unique() {
        let mut seen = HashSet::new();
        for spec in THEME_FIELDS {
            assert!(seen.insert(spec.field), "duplicate field {}", spec.field);
        }
    }

    #[test]
    fn derived_fields_only_copy_semantic_fields() {
        for spec in THEME_FIELDS {
            if let FieldSource::Derived(Derivation::Field(from)) = spec.source {
                let source = field_spec(from).unwrap_or_else(|| panic!("{} copies unknown {}", spec.field, from));
                assert_eq!(source.tier(), Tier::Semantic, "{} copies {}", spec.field, from);
            }
        }
    }

    #[test]
    fn switch_track_follows_primary() {
        let spec = field_spec("component.switch.trackOnBackground").unwrap();
        assert_eq!(spec.source, FieldSource::Derived(Derivation::Field("semantic.color.primary")));
    }

    #[test]
    fn kinds_match_resolved_values() {
        assert!(ValueKind::Number.matches(&ResolvedValue::Number(1.0)));
        assert!(!ValueKind::Number.matches(&ResolvedValue::from("1")));
        assert_eq!(ValueKind::Text.name(), ResolvedValue::from("x").kind_name());
    }

    #[test]
    fn required_paths_are_deduplicated() {
        let paths = required_token_paths();
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(paths.len(), unique.len());
        assert!(paths.contains(&"Primitive.Spacing.025"));
    }
}
