//! Placeholder substitution.

use crate::domain::{
    entities::{names::ComponentNames, request::GenerationRequest},
    value_objects::{CssExtension, TypeCheck},
};

/// Context for template rendering.
///
/// A **Value Object** holding every value substituted into template text.
///
/// ## Placeholders
///
/// | Token       | Replaced with                                   |
/// |-------------|-------------------------------------------------|
/// | `$Name$`    | component symbol name                           |
/// | `$name$`    | per-file scoped name (see `TemplateId::scoped_name`) |
/// | `$semi$`    | `;` when semicolons are enabled, else nothing   |
/// | `$css-ext$` | stylesheet extension without the dot            |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    component_name: String,
    file_name: String,
    css_extension: CssExtension,
    semi: bool,
    type_check: TypeCheck,
}

impl RenderContext {
    pub const COMPONENT_NAME: &'static str = "$Name$";
    pub const SCOPED_NAME: &'static str = "$name$";
    pub const SEMICOLON: &'static str = "$semi$";
    pub const CSS_EXTENSION: &'static str = "$css-ext$";

    pub const TOKENS: [&'static str; 4] = [
        Self::COMPONENT_NAME,
        Self::SCOPED_NAME,
        Self::SEMICOLON,
        Self::CSS_EXTENSION,
    ];

    pub fn new(
        names: &ComponentNames,
        css_extension: CssExtension,
        semi: bool,
        type_check: TypeCheck,
    ) -> Self {
        Self {
            component_name: names.component_name.clone(),
            file_name: names.file_name.clone(),
            css_extension,
            semi,
            type_check,
        }
    }

    pub fn from_request(request: &GenerationRequest, names: &ComponentNames) -> Self {
        Self::new(
            names,
            request.css_extension().clone(),
            request.semi(),
            request.type_check(),
        )
    }

    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn css_extension(&self) -> &CssExtension {
        &self.css_extension
    }

    pub const fn type_check(&self) -> TypeCheck {
        self.type_check
    }

    /// Replace every placeholder in `template`; `scoped_name` fills `$name$`.
    ///
    /// The tokens are disjoint, so replacement order does not matter.
    pub fn render(&self, template: &str, scoped_name: &str) -> String {
        template
            .replace(Self::COMPONENT_NAME, &self.component_name)
            .replace(Self::SCOPED_NAME, scoped_name)
            .replace(Self::SEMICOLON, if self.semi { ";" } else { "" })
            .replace(Self::CSS_EXTENSION, self.css_extension.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CaseKind;

    fn context(semi: bool) -> RenderContext {
        let names = ComponentNames::derive("my button", CaseKind::Param, CaseKind::Pascal).unwrap();
        RenderContext::new(&names, CssExtension::new("scss").unwrap(), semi, TypeCheck::None)
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = context(true).render("$Name$ $Name$ $name$ $name$.$css-ext$$semi$", "my-button");
        assert_eq!(out, "MyButton MyButton my-button my-button.scss;");
    }

    #[test]
    fn no_tokens_survive_rendering() {
        let template = "import './$name$.$css-ext$'$semi$\nexport default $Name$$semi$\n";
        let out = context(false).render(template, "my-button");
        for token in RenderContext::TOKENS {
            assert!(!out.contains(token), "{token} left in output");
        }
    }

    #[test]
    fn semicolon_token_only_changes_terminators() {
        let template = "a$semi$\nb$semi$\n";
        assert_eq!(context(true).render(template, "x"), "a;\nb;\n");
        assert_eq!(context(false).render(template, "x"), "a\nb\n");
    }

    #[test]
    fn text_without_tokens_is_untouched() {
        let text = "const x = { a: 1 }; // $ signs $alone";
        assert_eq!(context(true).render(text, "x"), text);
    }
}
