use colored::Colorize;
use signup_form::postcode::MIN_QUERY_LEN;
use signup_form::PostcodeSuggestions;

pub fn execute(partial: &str) {
    let provider = PostcodeSuggestions::default();
    let mut found = provider.suggest(partial).peekable();

    if found.peek().is_none() {
        if partial.chars().count() < MIN_QUERY_LEN {
            println!("Type at least {} characters", MIN_QUERY_LEN);
        } else {
            println!("{}", "No matching postcodes".yellow());
        }
        return;
    }

    for postcode in found {
        println!("  {}", postcode.cyan());
    }
}
