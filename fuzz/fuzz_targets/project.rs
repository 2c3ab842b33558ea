#![no_main]

use libfuzzer_sys::fuzz_target;
use slnscope::Project;

fuzz_target!(|data: &[u8]| {
    let mut project = Project::new("Fuzz");
    if project.load_details_from_mem(data).is_ok() {
        let _ = project.check_version_consistency();
    }
});
