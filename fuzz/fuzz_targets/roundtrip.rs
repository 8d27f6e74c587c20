#![no_main]
use arith::{decode, encode, Codeword, Model};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Keep exact-arithmetic growth in check; correctness is independent
    // of input length.
    if data.is_empty() || data.len() > 256 {
        return;
    }

    let model = match Model::build(&data) {
        Ok(model) => model,
        Err(_) => return,
    };

    let interval = encode(&model, &data).expect("training symbols are all in the model");
    let codeword = Codeword::from_interval(&interval).expect("encoder produced a valid interval");
    assert!(interval.contains(&codeword.value()));

    let decoded = decode(&model, &codeword, data.len()).expect("codeword matches its own model");
    assert_eq!(decoded, data);
});
