use canonical::{normalize_name, repair_script_with_step, NormalizeConfig};

fn main() {
    let cfg = NormalizeConfig::default();

    for raw in std::env::args().skip(1) {
        println!("{raw}");

        for token in normalize_name(&raw, &cfg) {
            let (_, step) = repair_script_with_step(&canonical::normalize_charset(&token.raw));
            println!("  {} -> {} ({step:?})", token.raw, token.text);
        }
    }
}
