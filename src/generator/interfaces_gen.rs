use crate::models::ModelDefinition;

use super::type_mapper::field_to_typescript;
use super::GeneratorContext;

/// First line of every generated file
pub const GENERATED_BANNER: &str = "// Generated by django-ts-generator. Do not edit manually.";

/// Generate the TypeScript file for all models of one source file.
///
/// `source_label` is the source path shown in the banner.
pub fn generate_interfaces_file(
    models: &[ModelDefinition],
    source_label: &str,
    ctx: &GeneratorContext,
) -> String {
    let mut output = String::new();

    if ctx.header {
        output.push_str(GENERATED_BANNER);
        output.push('\n');
        output.push_str(&format!("// Source: {}\n\n", source_label));
    }

    let blocks: Vec<String> = models
        .iter()
        .map(|model| generate_interface(model, ctx))
        .collect();
    output.push_str(&blocks.join("\n"));

    output
}

/// Generate a TypeScript interface for a Django model
pub fn generate_interface(model: &ModelDefinition, ctx: &GeneratorContext) -> String {
    let name = ctx.format_type_name(&model.name);

    if model.fields.is_empty() {
        return format!("export interface {} {{}}\n", name);
    }

    let mut output = format!("export interface {} {{\n", name);
    for field in &model.fields {
        let optional = if field.optional { "?" } else { "" };
        output.push_str(&format!(
            "  {}{}: {};\n",
            ctx.format_field_name(&field.name),
            optional,
            field_to_typescript(field, &ctx.type_map)
        ));
    }
    output.push_str("}\n");

    output
}
