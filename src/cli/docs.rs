//! Documentation content for zonespec CLI

use super::CliError;
use crate::ZonePredicate;

const SYNTAX: &str = r#"SYNTAX

  a | b             either operand matches (weakest)
  a ^ b             exactly one operand matches
  a & b             both operands match
  !a                operand does not match
  ( ... )           grouping

  Strings are double-quoted with no escapes; numbers may carry a sign and a
  fraction (no exponents).

EXAMPLE

  circle(0,0,500) & !biome("DESERT")
"#;

/// Get the predicate overview (one line per predicate)
pub fn get_predicates_overview() -> String {
    let mut out = String::from("ZONE PREDICATES\n\n");
    let width = ZonePredicate::ALL
        .iter()
        .map(|p| p.signature().len())
        .max()
        .unwrap_or_default();

    for predicate in ZonePredicate::ALL {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            predicate.signature(),
            predicate.help(),
            width = width
        ));
    }
    out.push('\n');
    out.push_str(SYNTAX);
    out.push_str("\nRun 'zonespec predicates <name>' for parameter details.\n");
    out
}

/// Get detailed documentation for one predicate
pub fn get_predicate_doc(name: &str) -> Result<String, CliError> {
    let predicate =
        ZonePredicate::lookup(name).ok_or_else(|| CliError::UnknownPredicate(name.to_string()))?;

    let mut out = format!("{}\n\n  {}\n\nPARAMETERS\n\n", predicate.signature(), predicate.help());
    for parameter in predicate.parameters() {
        out.push_str(&format!("  {:<8} {}\n", parameter.name, parameter.kind));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_every_predicate() {
        let overview = get_predicates_overview();
        for predicate in ZonePredicate::ALL {
            assert!(overview.contains(&predicate.signature()));
        }
    }

    #[test]
    fn predicate_doc_lists_parameter_types() {
        let doc = get_predicate_doc("DONUT").unwrap();
        assert!(doc.starts_with("donut(x,z,min,max)\n"));
        assert!(doc.contains("  max      number\n"));
        assert!(matches!(
            get_predicate_doc("sphere"),
            Err(CliError::UnknownPredicate(_))
        ));
    }
}
