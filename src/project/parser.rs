//! Extraction of project details from the element tree of a project file.
//!
//! The extractor reads literal element and attribute values only; it does not evaluate MSBuild
//! properties, conditions or imports. Every field is optional: a missing element leaves the
//! corresponding project field untouched, so the only failures are an unparseable document
//! (reported before this module runs) and a `RepositoryUrl` that is not an absolute URI.
//!
//! Processing order:
//!
//! 1. `Sdk` attributes of the root element and of `Import` elements
//! 2. every `PropertyGroup`, in document order, with later values overwriting earlier ones
//! 3. the target framework list, decoded from the last `TargetFramework(s)` value
//! 4. every `ItemGroup`: linked `.editorconfig`, package references and project references
//!
//! List fields are rebuilt from scratch on every run, so loading the same content twice leaves
//! the project unchanged.

use log::debug;
use url::Url;

use crate::{
    project::{
        Framework, NullableAnnotation, PackageReference, Project, ProjectFlags, ProjectType,
        SdkType,
    },
    xml::Element,
    Result,
};

const EDITOR_CONFIG: &str = ".editorconfig";

/// Populates `project` from the root element of its project file.
pub(crate) fn parse_project(project: &mut Project, root: &Element) -> Result<()> {
    parse_sdk_attribute(project, root);
    for import in root.descendants("Import") {
        parse_sdk_attribute(project, import);
    }

    for group in root.descendants("PropertyGroup") {
        parse_property_group(project, group)?;
    }

    project.frameworks = if project.target_frameworks.is_empty() {
        Vec::new()
    } else {
        parse_target_frameworks(&project.target_frameworks)
    };

    let mut package_references = Vec::new();
    let mut project_references = Vec::new();
    for group in root.descendants("ItemGroup") {
        parse_item_group(
            project,
            group,
            &mut package_references,
            &mut project_references,
        );
    }

    project.package_references = package_references;
    project.project_references = project_references;

    Ok(())
}

/// Decodes a semicolon separated framework list, dropping tokens that do not decode.
pub(crate) fn parse_target_frameworks(target_frameworks: &str) -> Vec<Framework> {
    target_frameworks
        .split(';')
        .filter_map(|token| {
            let framework = Framework::parse(token);
            if framework.is_none() {
                debug!("Ignoring unrecognized target framework '{}'", token);
            }
            framework
        })
        .collect()
}

fn parse_sdk_attribute(project: &mut Project, element: &Element) {
    if let Some(sdk_type) = element.attribute("Sdk").and_then(SdkType::from_attribute) {
        project.sdk_type = sdk_type;
    }
}

fn parse_property_group(project: &mut Project, group: &Element) -> Result<()> {
    parse_output_type(project, group);
    parse_options(project, group);
    parse_versions(project, group);
    parse_info(project, group)?;
    parse_frameworks(project, group);

    Ok(())
}

fn value(group: &Element, name: &str) -> Option<String> {
    group.child(name).map(Element::value)
}

fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

fn set_flag(project: &mut Project, group: &Element, name: &str, flag: ProjectFlags) {
    if let Some(text) = value(group, name) {
        project.flags.set(flag, is_true(&text));
    }
}

fn parse_output_type(project: &mut Project, group: &Element) {
    if let Some(output_type) = value(group, "OutputType") {
        project.output_type = output_type;
    }

    set_flag(project, group, "UseWPF", ProjectFlags::USE_WPF);
    set_flag(project, group, "UseWindowsForms", ProjectFlags::USE_WINDOWS_FORMS);

    if !project.project_type.is_msbuild_candidate() {
        return;
    }

    let classified = match project.output_type.as_str() {
        "" | "Library" => Some(ProjectType::Library),
        "WinExe" => Some(ProjectType::WinExe),
        "Exe" if project.use_wpf() || project.use_windows_forms() => Some(ProjectType::WinExe),
        "Exe" => Some(ProjectType::Console),
        _ => None,
    };

    if let Some(project_type) = classified {
        debug!(
            "Project '{}' classified as {} from output type '{}'",
            project.name, project_type, project.output_type
        );
        project.project_type = project_type;
    }
}

fn parse_options(project: &mut Project, group: &Element) {
    if let Some(language_version) = value(group, "LangVersion") {
        project.language_version = language_version;
    }

    if let Some(nullable) = value(group, "Nullable") {
        project.nullable = NullableAnnotation::from_element(&nullable);
    }

    if let Some(neutral_language) = value(group, "NeutralLanguage") {
        project.neutral_language = neutral_language;
    }

    set_flag(
        project,
        group,
        "TreatWarningsAsErrors",
        ProjectFlags::TREAT_WARNINGS_AS_ERRORS,
    );
    set_flag(project, group, "IsTestProject", ProjectFlags::TEST_PROJECT);

    if let Some(packable) = value(group, "IsPackable") {
        project
            .flags
            .set(ProjectFlags::NOT_PACKABLE, packable.eq_ignore_ascii_case("false"));
    }
}

fn parse_versions(project: &mut Project, group: &Element) {
    if let Some(version) = value(group, "Version") {
        project.version = version;
    }

    if let Some(assembly_version) = value(group, "AssemblyVersion") {
        project.assembly_version = assembly_version;
    }

    if let Some(file_version) = value(group, "FileVersion") {
        project.file_version = file_version;
    }
}

fn parse_info(project: &mut Project, group: &Element) -> Result<()> {
    if let Some(author) = value(group, "Authors") {
        project.author = author;
    }

    if let Some(description) = value(group, "Description") {
        project.description = description;
    }

    if let Some(copyright) = value(group, "Copyright") {
        project.copyright = copyright;
    }

    if let Some(repository_url) = value(group, "RepositoryUrl") {
        project.repository_url = Some(Url::parse(&repository_url)?);
    }

    if let Some(application_icon) = value(group, "ApplicationIcon") {
        project.application_icon = application_icon;
    }

    if let Some(package_icon) = value(group, "PackageIcon") {
        project.package_icon = package_icon;
    }

    if let Some(license) = value(group, "PackageLicenseExpression") {
        project.package_license_expression = license;
    }

    if let Some(readme) = value(group, "PackageReadmeFile") {
        project.package_readme_file = readme;
    }

    Ok(())
}

fn parse_frameworks(project: &mut Project, group: &Element) {
    if let Some(target_framework) = value(group, "TargetFramework") {
        project.target_frameworks = target_framework;
    } else if let Some(target_frameworks) = value(group, "TargetFrameworks") {
        project.target_frameworks = target_frameworks;
    }
}

fn parse_item_group(
    project: &mut Project,
    group: &Element,
    package_references: &mut Vec<PackageReference>,
    project_references: &mut Vec<String>,
) {
    parse_editor_config_link(project, group);
    parse_package_references(project, group, package_references);
    parse_project_references(group, project_references);
}

fn parse_editor_config_link(project: &mut Project, group: &Element) {
    for item in group.children("None") {
        let includes = item
            .attribute("Include")
            .is_some_and(|include| include.ends_with(EDITOR_CONFIG));
        let links = item.attribute("Link") == Some(EDITOR_CONFIG)
            || item
                .descendants("Link")
                .any(|link| link.value() == EDITOR_CONFIG);

        if includes && links {
            project.flags.insert(ProjectFlags::EDITOR_CONFIG_LINKED);
        }
    }
}

fn parse_package_references(
    project: &Project,
    group: &Element,
    package_references: &mut Vec<PackageReference>,
) {
    for item in group.children("PackageReference") {
        let name = item.attribute("Include").unwrap_or_default();
        let version = item.attribute("Version").unwrap_or_default();
        let condition = item.attribute("Condition").unwrap_or_default();

        let mut private_assets = item
            .attribute("PrivateAssets")
            .unwrap_or_default()
            .to_string();
        if let Some(child) = item.child("PrivateAssets") {
            private_assets = child.value();
        }

        if name.is_empty() || version.is_empty() {
            continue;
        }

        package_references.push(PackageReference::new(
            project.name.as_str(),
            name,
            version,
            condition,
            private_assets.eq_ignore_ascii_case("all"),
        ));
    }
}

fn parse_project_references(group: &Element, project_references: &mut Vec<String>) {
    for item in group.children("ProjectReference") {
        let include = item.attribute("Include").unwrap_or_default();
        if include.is_empty() {
            continue;
        }

        let name = file_stem(include).to_string();
        if !project_references.contains(&name) {
            project_references.push(name);
        }
    }
}

/// Strips directories (either separator) and the last extension from a path.
fn file_stem(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => file_name,
    }
}
