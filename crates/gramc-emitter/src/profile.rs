//! Per-language structural emission table.
//!
//! Each target language has one [`LanguageProfile`] row. Structural
//! operations on the session look the row up for the active language and
//! call its renderers, so supporting another language means adding a row
//! here rather than another branch in every operation.

use gramc_common::{EmitStyle, TargetLanguage, UnicodeEscapeStyle};

use crate::buffers::{BufferKind, OutputBuffers};

/// Inputs for a class header.
#[derive(Debug, Clone, Copy)]
pub struct ClassHeader<'a> {
    pub modifier: Option<&'a str>,
    pub name: &'a str,
    /// At most one entry by the time a renderer sees it.
    pub super_classes: &'a [&'a str],
    pub super_interfaces: &'a [&'a str],
}

/// Inputs for a method definition header.
#[derive(Debug, Clone, Copy)]
pub struct MethodHeader<'a> {
    pub mods_and_return_type: &'a str,
    pub class_name: Option<&'a str>,
    pub name_and_params: &'a str,
    pub exceptions: Option<&'a str>,
}

pub struct LanguageProfile {
    pub language: TargetLanguage,
    pub style: EmitStyle,
    pub body_extension: &'static str,
    /// Extension of the declarations file, for split-style targets.
    pub header_extension: Option<&'static str>,
    pub escape_style: UnicodeEscapeStyle,
    pub annotation: fn(&str) -> String,
    /// `None` means the modifier has no equivalent and is dropped.
    pub modifier: fn(&str) -> Option<String>,
    pub class_header: fn(&ClassHeader<'_>) -> String,
    pub method_header: fn(&mut OutputBuffers, &MethodHeader<'_>),
}

static PROFILES: [LanguageProfile; 2] = [
    LanguageProfile {
        language: TargetLanguage::Java,
        style: EmitStyle::Primary,
        body_extension: "java",
        header_extension: None,
        escape_style: UnicodeEscapeStyle::Utf16Surrogates,
        annotation: java_annotation,
        modifier: java_modifier,
        class_header: java_class_header,
        method_header: java_method_header,
    },
    LanguageProfile {
        language: TargetLanguage::Cpp,
        style: EmitStyle::Split,
        body_extension: "cc",
        header_extension: Some("h"),
        escape_style: UnicodeEscapeStyle::LongUniversal,
        annotation: cpp_annotation,
        modifier: cpp_modifier,
        class_header: cpp_class_header,
        method_header: cpp_method_header,
    },
];

/// Look up the profile row for `language`.
pub fn profile(language: TargetLanguage) -> &'static LanguageProfile {
    match language {
        TargetLanguage::Java => &PROFILES[0],
        TargetLanguage::Cpp => &PROFILES[1],
    }
}

/// `Name::` prefix for out-of-class definitions; empty for free functions.
pub fn class_qualifier(class_name: Option<&str>) -> String {
    match class_name {
        Some(name) => format!("{name}::"),
        None => String::new(),
    }
}

fn push_comma_separated(out: &mut String, items: &[&str]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item);
    }
}

// =============================================================================
// Java
// =============================================================================

fn java_annotation(name: &str) -> String {
    format!("@{name}")
}

fn java_modifier(modifier: &str) -> Option<String> {
    Some(modifier.to_string())
}

fn java_class_header(header: &ClassHeader<'_>) -> String {
    let mut out = String::new();
    if let Some(modifier) = header.modifier {
        out.push_str(modifier);
        out.push(' ');
    }
    out.push_str("class ");
    out.push_str(header.name);
    if let Some(super_class) = header.super_classes.first() {
        out.push_str(" extends ");
        out.push_str(super_class);
    }
    if !header.super_interfaces.is_empty() {
        out.push_str(" implements ");
        push_comma_separated(&mut out, header.super_interfaces);
    }
    out.push_str(" {\n");
    out
}

fn java_method_header(buffers: &mut OutputBuffers, header: &MethodHeader<'_>) {
    let mut out = format!("{} {}", header.mods_and_return_type, header.name_and_params);
    if let Some(exceptions) = header.exceptions {
        out.push_str(" throws ");
        out.push_str(exceptions);
    }
    out.push('\n');
    buffers.push_str(&out);
}

// =============================================================================
// C++
// =============================================================================

fn cpp_annotation(name: &str) -> String {
    format!("/*{name}*/")
}

fn cpp_modifier(modifier: &str) -> Option<String> {
    let lowered = modifier.to_lowercase();
    match lowered.as_str() {
        "public" | "private" => Some(format!("{lowered}: ")),
        _ => None,
    }
}

fn cpp_class_header(header: &ClassHeader<'_>) -> String {
    let mut out = format!("class {}", header.name);
    let bases: Vec<&str> = header
        .super_classes
        .iter()
        .chain(header.super_interfaces)
        .copied()
        .collect();
    if !bases.is_empty() {
        out.push_str(" : ");
        push_comma_separated(&mut out, &bases);
    }
    out.push_str(" {\n");
    out.push_str("   public:\n");
    out
}

fn cpp_method_header(buffers: &mut OutputBuffers, header: &MethodHeader<'_>) {
    let throw_spec = header
        .exceptions
        .map(|exceptions| format!(" throw({exceptions})"))
        .unwrap_or_default();

    let prototype = format!(
        "\n{} {}{};\n",
        header.mods_and_return_type, header.name_and_params, throw_spec
    );
    buffers.push_to(BufferKind::Include, &prototype);

    let definition = format!(
        "\n{} {}{}{}",
        header.mods_and_return_type,
        class_qualifier(header.class_name),
        header.name_and_params,
        throw_spec
    );
    buffers.push_to(BufferKind::Main, &definition);
    buffers.select(BufferKind::Main);
}
