use inspection::{aggregate, inspect};

fn main() {
    let descriptions = [
        "A photo of a man with short brown hair, wearing sunglasses, looks like a selfie.",
        "A 34 years old man with brown hair and blue eyes, slightly blurry.",
        "A man with a beard and black hair standing next to another person and a person.",
    ];

    let records: Vec<_> = descriptions.iter().map(|text| inspect(text)).collect();
    for (text, record) in descriptions.iter().zip(&records) {
        println!("{text}");
        println!("  -> {record:?}");
        for issue in record.issues(Some("man")) {
            println!("  issue: {issue}");
        }
    }

    let consensus = aggregate(&records);
    println!("consensus:");
    for (field, value) in consensus.iter() {
        println!("  {field}: {value}");
    }
}
