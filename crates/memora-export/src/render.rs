use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Render a Tera template with any serializable value as its context.
///
/// `template_content` is the raw template string (Jinja2 syntax). The
/// top-level fields of `data` become the template variables, so `data`
/// must serialize to a JSON object.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
