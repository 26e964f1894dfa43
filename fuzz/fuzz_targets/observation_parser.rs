#![no_main]

use demand_trend::observation::parse_observations;
use demand_trend::regression::RegressionEngine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Neither decoding nor fitting may panic, whatever the document holds
        if let Ok(observations) = parse_observations(input) {
            let engine = RegressionEngine::new(&observations);
            let result = engine.fit(0, 0);
            if !result.is_neutral() {
                assert_eq!(result.trend_significant, result.p_value < 0.05);
            }
        }
    }
});
