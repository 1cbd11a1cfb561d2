use crate::error::Result;
use crate::fmt::CurrencyFormatter;
use crate::models::Money;
use crate::settings::{load_settings, save_settings};

pub fn run(code: Option<&str>) -> Result<()> {
    let mut settings = load_settings();

    match code {
        None => {
            println!("Display currency: {}", settings.currency);
        }
        Some(code) => {
            let code = code.trim().to_uppercase();
            settings.currency = code.clone();
            save_settings(&settings)?;
            let sample = CurrencyFormatter::new(&code).format(Money::new(2550, 2));
            println!("Display currency set to {code} (e.g. {sample})");
        }
    }
    Ok(())
}
