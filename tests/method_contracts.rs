use std::{
    fs::File,
    path::{Path, PathBuf},
};

use slnscope::prelude::*;

fn sample_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/samples")
        .join(relative)
}

fn solution_path() -> PathBuf {
    sample_path("Method.Contracts/Method.Contracts.sln")
}

#[test]
fn solution_structure() {
    let solution = Solution::from_path(solution_path()).unwrap();

    assert_eq!(solution.name(), "Method.Contracts");
    assert_eq!(solution.format_version(), "12.00");
    assert_eq!(solution.visual_studio_version(), "17.9.34728.123");
    assert_eq!(solution.minimum_visual_studio_version(), "10.0.40219.1");

    let configurations: Vec<String> = solution
        .configurations()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(configurations, vec!["Debug|x64", "Release|x64"]);

    let projects = solution.projects();
    assert_eq!(projects.len(), 3);

    let library = &projects[0];
    assert_eq!(library.name(), "Method.Contracts");
    assert_eq!(
        library.relative_path(),
        "Method.Contracts\\Method.Contracts.csproj"
    );
    assert_eq!(library.project_type(), ProjectType::KnownToBeMSBuildFormat);
    assert_eq!(library.extension(), ".csproj");
    assert_eq!(library.dependency_level(), 0);
    assert!(!library.is_static_library());
    assert!(library.guid().is_some());

    let test = &projects[1];
    assert_eq!(test.dependencies(), &[library.guid_text().to_string()]);
    assert_eq!(test.dependency_level(), 1);
    assert_eq!(test.configurations().len(), 2);
    assert!(test.configurations()[0].include_in_build());
    assert!(!test.configurations()[1].include_in_build());

    let folder = &projects[2];
    assert_eq!(folder.project_type(), ProjectType::SolutionFolder);
    assert!(folder.configurations().is_empty());
    assert_eq!(folder.parent_project_guid(), "");
}

#[test]
fn load_library_details() {
    let mut solution = Solution::from_path(solution_path()).unwrap();
    let path = solution.project_path(&solution.projects()[0]);

    let library = &mut solution.projects_mut()[0];
    library.load_details(&path).unwrap();

    assert_eq!(library.project_type(), ProjectType::Library);
    assert_eq!(library.sdk_type(), SdkType::Sdk);
    assert_eq!(library.output_type(), "");
    assert_eq!(library.language_version(), "13");
    assert_eq!(library.nullable(), NullableAnnotation::Enable);
    assert_eq!(library.neutral_language(), "en-US");
    assert!(library.is_treat_warnings_as_errors());
    assert!(library.is_editor_config_linked());
    assert!(!library.is_test_project());
    assert!(!library.is_not_packable());
    assert!(!library.use_wpf());
    assert!(!library.use_windows_forms());

    assert_eq!(library.version(), "1.2.0");
    assert_eq!(library.assembly_version(), "1.2.0.0");
    assert_eq!(library.file_version(), "1.2.0.0");
    assert_eq!(library.author(), "David Le Bansais");
    assert_eq!(library.description(), "Tools for method contracts");
    assert_eq!(library.copyright(), "Copyright © 2024 David Le Bansais");
    assert_eq!(
        library.repository_url().map(|url| url.as_str()),
        Some("https://github.com/dlebansais/Method.Contracts")
    );
    assert_eq!(library.application_icon(), "main.ico");
    assert_eq!(library.package_icon(), "main.png");
    assert_eq!(library.package_license_expression(), "0BSD");
    assert_eq!(library.package_readme_file(), "README-short.md");

    assert_eq!(library.target_frameworks(), "net481;net8.0-windows7.0");
    let frameworks = library.frameworks();
    assert_eq!(frameworks.len(), 2);
    assert_eq!(frameworks[0].framework_type(), FrameworkType::NetFramework);
    assert_eq!((frameworks[0].major(), frameworks[0].minor()), (4, 81));
    assert_eq!(frameworks[1].moniker(), FrameworkMoniker::Windows);
    assert_eq!(
        (frameworks[1].moniker_major(), frameworks[1].moniker_minor()),
        (7, 0)
    );

    let packages = library.package_references();
    assert_eq!(packages.len(), 6);
    assert_eq!(packages[0].name(), "Contracts-Analyzers");
    assert_eq!(packages[0].version(), "2.0.0");
    assert_eq!(packages[0].condition(), "");
    assert!(!packages[0].is_all_private_assets());
    assert_eq!(packages[0].project(), "Method.Contracts");
    assert!(packages[1].is_all_private_assets());
    assert!(packages[2].is_all_private_assets());
    assert_eq!(packages[4].name(), "PolySharp");
    assert_eq!(packages[4].condition(), "'$(TargetFramework)'=='net481'");
    assert!(packages[4].is_all_private_assets());

    assert!(!library.check_version_consistency().has_error);
}

#[test]
fn load_test_project_from_stream() {
    let mut solution = Solution::from_path(solution_path()).unwrap();
    let path = solution.project_path(&solution.projects()[1]);

    let test = &mut solution.projects_mut()[1];
    let mut stream = File::open(path).unwrap();
    test.load_details_from_reader(&mut stream).unwrap();

    assert_eq!(test.project_type(), ProjectType::Library);
    assert!(test.is_test_project());
    assert!(test.is_not_packable());
    assert!(!test.is_editor_config_linked());
    assert_eq!(test.project_references(), &["Method.Contracts".to_string()]);
    assert_eq!(test.package_references().len(), 4);
    assert!(!test.has_version());
    assert!(!test.has_repository_url());

    let consistency = test.check_version_consistency();
    assert!(!consistency.has_error);
    assert_eq!(consistency.message, "Ignored because no version");
}

#[test]
fn loader() {
    let result = SolutionLoader::new()
        .solution_file(solution_path())
        .unwrap()
        .build()
        .unwrap();

    assert!(result.is_complete_success());
    assert_eq!(result.success_count(), 2);
    assert_eq!(
        result.loaded_projects,
        vec!["Method.Contracts", "Method.Contracts.Test"]
    );
    assert!(!result.has_version_errors());

    let library = result.solution.project_by_name("Method.Contracts").unwrap();
    assert_eq!(library.frameworks().len(), 2);
}

#[test]
fn solution_from_memory() {
    let data = std::fs::read(solution_path()).unwrap();
    let solution = Solution::from_mem("Method.Contracts.sln", &data).unwrap();

    assert_eq!(solution.name(), "Method.Contracts.sln");
    assert_eq!(solution.file_name(), Path::new(""));
    assert_eq!(solution.projects().len(), 3);
}

#[test]
fn nested_folders() {
    let result = SolutionLoader::new()
        .solution_file(sample_path("Nested-Folders/Method.Contracts.sln"))
        .unwrap()
        .build()
        .unwrap();

    let solution = &result.solution;
    let library = solution.project_by_name("Method.Contracts").unwrap();
    let src = solution.project_by_name("src").unwrap();
    let tools = solution.project_by_name("tools").unwrap();
    let shared = solution.project_by_name("Shared").unwrap();

    assert_eq!(library.parent_project_guid(), src.guid_text());
    assert_eq!(tools.parent_project_guid(), src.guid_text());
    assert_eq!(shared.parent_project_guid(), tools.guid_text());
    assert_eq!(src.parent_project_guid(), "");
    assert_eq!(shared.project_type(), ProjectType::SharedProject);

    assert_eq!(library.configurations().len(), 1);
    assert!(library.configurations()[0].include_in_build());
    assert_eq!(library.configurations()[0].platform_name(), "Any CPU");
    assert_eq!(
        library.configurations()[0].project_configuration(),
        "Debug|Any CPU"
    );

    assert_eq!(result.loaded_projects, vec!["Method.Contracts"]);
    assert_eq!(library.project_type(), ProjectType::Library);
}

#[test]
fn duplicate_project_names() {
    let result = SolutionLoader::new()
        .solution_file(sample_path("Duplicate-Names/Duplicate-Names.sln"))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(result.loaded_projects, vec!["App", "App"]);

    let loaded: Vec<_> = result.loaded().collect();
    assert_eq!(loaded.len(), 2);
    assert_ne!(loaded[0].guid_text(), loaded[1].guid_text());
    assert_eq!(loaded[0].version(), "1.0.0");
    assert_eq!(loaded[1].version(), "2.0.0");
    assert_eq!(loaded[0].project_type(), ProjectType::Console);
    assert_eq!(loaded[1].project_type(), ProjectType::Library);

    let failing: Vec<_> = loaded
        .iter()
        .filter(|project| project.check_version_consistency().has_error)
        .map(|project| project.relative_path())
        .collect();
    assert_eq!(failing, vec!["Two\\App\\App.csproj"]);
    assert_eq!(result.version_errors.len(), 1);
}
