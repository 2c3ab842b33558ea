#![no_main]

use libfuzzer_sys::fuzz_target;
use slnscope::Solution;

fuzz_target!(|data: &[u8]| {
    if let Ok(solution) = Solution::from_mem("Fuzz", data) {
        for project in solution.projects() {
            let _ = project.guid();
            let _ = solution.project_path(project);
        }
    }
});
