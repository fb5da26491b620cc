use handkind::core::{HandError, classify, sample_hand};

/// Deal one random five card hand and print its classification.
fn main() -> Result<(), HandError> {
    let mut rng = rand::rng();

    let hand = sample_hand(&mut rng);
    let rendered: Vec<String> = hand.iter().map(|c| c.to_string()).collect();
    println!("Hand: {}", rendered.join(", "));

    let kind = classify(&hand)?;
    println!("{kind}");

    Ok(())
}
