//! Print what a code decodes to.
//!
//! ```text
//! cargo run --example inspect_code -- NGD-SJG-21H
//! RUST_LOG=course_code=trace cargo run --example inspect_code -- ngd-SJG-21H
//! ```

use course_code::{
    Code, get_code_type, is_nso_course_code, is_nso_maker_code, is_ocw_course_code,
    is_ocw_maker_code,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = std::env::args().nth(1).unwrap_or_else(|| "NGD-SJG-21H".to_string());
    let code: Code = match input.parse() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", input, e);
            std::process::exit(1);
        }
    };

    let summary = serde_json::json!({
        "code": code,
        "isNSOCourseCode": is_nso_course_code(&input),
        "isNSOMakerCode": is_nso_maker_code(&input),
        "isOCWCourseCode": is_ocw_course_code(&input),
        "isOCWMakerCode": is_ocw_maker_code(&input),
        "codeType": get_code_type(&input),
        "toString": code.to_string(),
        "inString": format!("This is a code: {}", code),
        "binary": format!("{:045b}", code.inverted()),
        "meta": code.meta(),
        "value": code.value(),
    });

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("failed to render summary: {}", e),
    }
}
