//! Bank prediction examples

use nuban_predictor::{
    compute_check_digit, normalize_bank_code, predict, BankPredictor, InstitutionDirectory,
    PredictionRules, StaticDirectory,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏦 NUBAN Predictor - Bank Prediction Examples\n");

    // 1. Bank code normalization
    println!("🔢 Bank Code Normalization:");
    for code in ["044", "50515", "999992", "1234"] {
        match normalize_bank_code(code) {
            Some(normalized) => println!("  {:>6} -> {}", code, normalized),
            None => println!("  {:>6} -> unusable", code),
        }
    }
    println!();

    // 2. Check digits for one serial under different banks
    println!("✅ Check Digits for serial 560000001:");
    let directory = StaticDirectory::bundled()?;
    for query in ["GTBANK PLC", "ACCESS BANK", "MONIEPOINT MICROFINANCE BANK"] {
        let bank = directory.find_bank_required(query)?;
        if let Some(digit) = compute_check_digit("560000001", &bank.code) {
            println!("  {:<30} ({}) -> 560000001{}", bank.name, bank.code, digit);
        }
    }
    println!();

    // 3. Predictions over the bundled tables
    for input in ["5600000011", "0000000017", "8012345678", "9012345678", "12345"] {
        let banks = predict(input)?;
        println!("🔍 {} -> {} candidate(s)", input, banks.len());
        for (rank, bank) in banks.iter().take(5).enumerate() {
            println!("  {}. {} ({})", rank + 1, bank.name, bank.code);
        }
    }
    println!();

    // 4. Custom ranking rules
    println!("⚙️  Custom Ranking (GTBank first):");
    let rules = PredictionRules {
        popular_banks: vec!["GTBANK PLC".to_string()],
        ..PredictionRules::default()
    };
    let predictor = BankPredictor::new(directory).with_rules(rules);
    let prediction = predictor.predict_detailed("5600000011")?;
    for bank in &prediction.institutions {
        println!("  - {} ({})", bank.name, bank.code);
    }

    Ok(())
}
