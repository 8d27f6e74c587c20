//! Profiling loop for flamegraph runs: repeated model build, encode,
//! codeword selection, and decode over a fixed text.

use arith::{decode, encode, Codeword, Model};

fn main() {
    let symbols: Vec<char> = "abracadabra alakazam ".chars().cycle().take(300).collect();

    for _ in 0..200 {
        let model = Model::build(&symbols).unwrap();
        let interval = encode(&model, &symbols).unwrap();
        let codeword = Codeword::from_interval(&interval).unwrap();
        let decoded = decode(&model, &codeword, symbols.len()).unwrap();
        assert_eq!(decoded, symbols);
    }
}
