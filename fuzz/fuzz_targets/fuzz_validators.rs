#![no_main]

use hubdev::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Accepted values must come back as pure digits of the right length.
        if let Ok(cnpj) = validate_cnpj(s) {
            assert_eq!(cnpj.as_str().len(), 14);
        }
        if let Ok(cpf) = validate_cpf(s) {
            assert_eq!(cpf.as_str().len(), 11);
        }
        if let Ok(cep) = validate_cep(s) {
            assert_eq!(cep.as_str().len(), 8);
        }
        if let Ok(date) = validate_date(s) {
            assert_eq!(date.to_string(), s);
        }
        let _ = validate_municipal_code(s);
    }
});
