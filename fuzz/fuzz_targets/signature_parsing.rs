#![no_main]

use jvm_generics::types::signatures::{GenericType, method::MethodSignature};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(signature) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(parsed) = GenericType::parse(signature) {
        let _ = parsed.to_string();
        assert_eq!(GenericType::parse(&parsed.signature()), Ok(parsed));
    }
    let _ = GenericType::parse_many(signature);
    let _ = signature.parse::<MethodSignature>();
});
