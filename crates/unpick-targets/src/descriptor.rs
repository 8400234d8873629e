use crate::error::{Result, TargetsError};

/// A validated JVM method descriptor such as `(ILjava/lang/String;)V`.
///
/// Only the shape the registry needs is kept: how many parameters the method takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    param_count: usize,
}

impl MethodDescriptor {
    pub fn param_count(&self) -> usize {
        self.param_count
    }
}

pub fn parse_method_descriptor(desc: &str) -> Result<MethodDescriptor> {
    let invalid = || TargetsError::InvalidDescriptor(desc.to_string());

    let mut rest = desc.strip_prefix('(').ok_or_else(invalid)?;
    let mut param_count = 0;
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            rest = after;
            break;
        }
        rest = skip_field_type(rest).ok_or_else(invalid)?;
        param_count += 1;
    }

    let rest = match rest.strip_prefix('V') {
        Some(after) => after,
        None => skip_field_type(rest).ok_or_else(invalid)?,
    };
    if !rest.is_empty() {
        return Err(invalid());
    }

    Ok(MethodDescriptor { param_count })
}

/// Consumes one field type from the front of `input`, returning what follows it.
fn skip_field_type(input: &str) -> Option<&str> {
    match *input.as_bytes().first()? {
        b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z' => Some(&input[1..]),
        b'L' => {
            let end = input.find(';')?;
            // `L;` names no class.
            if end == 1 {
                return None;
            }
            Some(&input[end + 1..])
        }
        b'[' => skip_field_type(&input[1..]),
        _ => None,
    }
}
