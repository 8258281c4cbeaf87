//! Recursive text display of a value, the way a debugger expands it.
use log::debug;

use glimpse::{InspectedValue, Registry, VisualizeError};

const INDENT: &str = "  ";

/// Renders `value` and everything below it, one child per line.
pub fn render_tree<V: InspectedValue>(
    registry: &Registry,
    value: &V,
) -> Result<String, VisualizeError> {
    let mut out = String::new();
    write_node(registry, None, value, 0, &mut out)?;
    Ok(out)
}

fn write_line(out: &mut String, depth: usize, label: Option<&str>, text: &str) {
    let indent = INDENT.repeat(depth);
    let prefix = match label {
        Some(label) => format!("{}{} = ", indent, label),
        None => indent,
    };
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    out.push_str(&format!("{}{}\n", prefix, first));
    // continuation lines of a multi-line summary line up under the first
    let pad = " ".repeat(prefix.len());
    for line in lines {
        out.push_str(&format!("{}{}\n", pad, line));
    }
}

fn write_node<V: InspectedValue>(
    registry: &Registry,
    label: Option<&str>,
    value: &V,
    depth: usize,
    out: &mut String,
) -> Result<(), VisualizeError> {
    if let Some(rendered) = registry.render(value) {
        let node = rendered?;
        write_line(out, depth, label, &node.summary);
        for child in &node.children {
            write_node(registry, Some(&child.label), &child.value, depth + 1, out)?;
        }
        return Ok(());
    }

    let ty = value.type_descriptor();
    if let Some((low, high)) = ty.range() {
        debug!("expanding array `{}`", ty.name());
        write_line(out, depth, label, ty.name());
        let count = (high - low + 1).max(0) as usize;
        for idx in 0..count {
            let element = value.element(idx)?;
            write_node(registry, Some(&format!("[{}]", idx)), &element, depth + 1, out)?;
        }
    } else if ty.encoding().is_some() {
        let scalar = value.scalar()?;
        write_line(out, depth, label, &scalar.to_string());
    } else {
        write_line(out, depth, label, &format!("<{}>", ty.name()));
    }
    Ok(())
}
