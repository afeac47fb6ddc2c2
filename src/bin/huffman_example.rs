use huffman_coder::huffman::{Coder, CodingError};

fn main() -> Result<(), CodingError> {
    let text = b"abracadabra alakazam";

    let mut coder = Coder::new();
    coder.build(text)?;
    if let Some(tree) = coder.tree() {
        println!("huffman tree\n{}", tree);
    }
    if let Some(frequencies) = coder.frequencies() {
        println!("frequencies\n{:?}", frequencies);
    }
    if let Some(codes) = coder.codes() {
        println!("codes\n{:?}", codes);
    }

    let encoded = coder.encode(text)?;
    println!("encoded sequence\n{}", encoded);

    let decoded = coder.decode(&encoded)?;
    println!("decoded sequence\n{}", String::from_utf8_lossy(&decoded));

    match coder.decode(&encoded[..encoded.len() - 1]) {
        Err(e) => println!("truncated sequence\n{}", e),
        Ok(_) => println!("truncated sequence decoded unexpectedly"),
    }
    Ok(())
}
