use afl::fuzz;
use israel_bank_account_validator::{validate_bank_account, FieldInput};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

// Input format: `bank,branch,account,seed`
fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (bank, bytes) = split_bytes_once(bytes)?;
    let (branch, bytes) = split_bytes_once(bytes)?;
    let (account, rand_seed) = split_bytes_once(bytes)?;

    let bank = std::str::from_utf8(bank).ok()?;
    let branch = std::str::from_utf8(branch).ok()?;
    let account = std::str::from_utf8(account).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(bank, branch, account, rng);

    Some(())
}

/// Randomly passes a field as text or, when it parses, as an integer.
fn gen_field(text: &str, rng: &mut StdRng) -> FieldInput {
    if !rng.gen_bool(0.5) {
        return FieldInput::Text(text.to_string());
    }
    if let Ok(value) = text.trim().parse::<i64>() {
        FieldInput::Number(value)
    } else if let Ok(value) = text.trim().parse::<u64>() {
        FieldInput::Unsigned(value)
    } else {
        FieldInput::Text(text.to_string())
    }
}

fn run_fuzz(bank: &str, branch: &str, account: &str, mut rng: StdRng) {
    let text_result = validate_bank_account(bank, branch, account);

    #[cfg(feature = "manual_test")]
    {
        println!("Bank: {:?}", bank);
        println!("Branch: {:?}", branch);
        println!("Account: {:?}", account);
        println!("Result: {:?}", text_result);
    }

    // the same call gives the same answer
    assert_eq!(validate_bank_account(bank, branch, account), text_result);

    // and does not depend on whether fields were given as text or integers
    let mixed_result = validate_bank_account(
        gen_field(bank, &mut rng),
        gen_field(branch, &mut rng),
        gen_field(account, &mut rng),
    );
    assert_eq!(mixed_result, text_result);
}
