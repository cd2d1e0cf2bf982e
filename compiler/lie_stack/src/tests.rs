use super::*;

/// Depth of a run of nested parentheses, parsed recursively.
fn nesting(bytes: &[u8], at: &mut usize) -> Result<u32, &'static str> {
    ensure_sufficient_stack(|| match bytes.get(*at) {
        Some(b'(') => {
            *at += 1;
            let inner = nesting(bytes, at)?;
            match bytes.get(*at) {
                Some(b')') => {
                    *at += 1;
                    Ok(inner + 1)
                }
                _ => Err("unclosed"),
            }
        }
        _ => Ok(0),
    })
}

#[test]
fn shallow_nesting() {
    let mut at = 0;
    assert_eq!(nesting(b"((()))", &mut at), Ok(3));
    assert_eq!(at, 6);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 100_000;
    let source = format!("{}{}", "(".repeat(depth), ")".repeat(depth));
    let mut at = 0;
    assert_eq!(nesting(source.as_bytes(), &mut at), Ok(100_000));
}

#[test]
fn errors_propagate_from_depth() {
    let source = "(".repeat(50_000);
    let mut at = 0;
    assert_eq!(nesting(source.as_bytes(), &mut at), Err("unclosed"));
}
