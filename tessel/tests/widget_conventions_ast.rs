use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{File, Item, UseTree, Visibility};

const FORBIDDEN_COUPLING: &[&str] = &[
    "crate::app::AppEvent",
    "SidebarProvider",
    "ListenerRegistry",
    "PreferenceStore",
];
const FORBIDDEN_EFFECTS: &[&str] =
    &["log::", "std::fs::", "Task::", "iced::Task"];

/// Items a widget module exposes, keyed by role.
#[derive(Default)]
struct WidgetSurface {
    views: usize,
    private_views: usize,
    props: Vec<String>,
    events: Vec<String>,
    glob_imports: usize,
}

impl WidgetSurface {
    fn collect(file: &File) -> Self {
        let mut surface = Self::default();
        for item in &file.items {
            match item {
                Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                    if is_pub_crate(&item_fn.vis) {
                        surface.views += 1;
                    } else {
                        surface.private_views += 1;
                    }
                },
                Item::Struct(item_struct) => {
                    let name = item_struct.ident.to_string();
                    if name.ends_with("Props") {
                        surface.props.push(name);
                    }
                },
                Item::Enum(item_enum) => {
                    let name = item_enum.ident.to_string();
                    if name.ends_with("Event") {
                        surface.events.push(name);
                    }
                },
                Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                    surface.glob_imports += 1;
                },
                _ => {},
            }
        }
        surface
    }
}

#[test]
fn given_gallery_widgets_when_validating_conventions_then_all_modules_comply() {
    let widgets_dir =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/ui/widgets");
    let mut violations = Vec::new();

    let declared =
        declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let on_disk = module_files(&widgets_dir, &mut violations);
    if declared != on_disk {
        violations.push(format!(
            "declared widget modules {declared:?} do not match files {on_disk:?}"
        ));
    }

    for module in &declared {
        let path = widgets_dir.join(format!("{module}.rs"));
        validate_widget(&path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_snake_case_stem_when_converted_then_pascal_prefix_is_returned() {
    assert_eq!(snake_to_pascal_case("nav_menu"), "NavMenu");
    assert_eq!(snake_to_pascal_case("top_bar"), "TopBar");
    assert_eq!(snake_to_pascal_case("content__panel"), "ContentPanel");
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let file = parse(mod_rs);
    let mut modules = BTreeSet::new();

    for item in &file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                modules.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: '{}' must be declared as pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard imports are forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    modules
}

fn module_files(dir: &Path, violations: &mut Vec<String>) -> BTreeSet<String> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    let mut modules = BTreeSet::new();
    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();
        if path.is_dir() {
            violations.push(format!(
                "{}: widget modules must stay flat",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let stem = stem_of(&path);
        if stem != "mod" {
            modules.insert(stem);
        }
    }

    modules
}

fn validate_widget(path: &Path, violations: &mut Vec<String>) {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    let name = path.display();

    for pattern in FORBIDDEN_COUPLING {
        if source.contains(pattern) {
            violations.push(format!("{name}: widgets must not use {pattern}"));
        }
    }
    for pattern in FORBIDDEN_EFFECTS {
        if source.contains(pattern) {
            violations.push(format!("{name}: side effect detected: {pattern}"));
        }
    }

    let surface = WidgetSurface::collect(&parse(path));
    let prefix = snake_to_pascal_case(&stem_of(path));

    if surface.views != 1 || surface.private_views != 0 {
        violations.push(format!(
            "{name}: expected exactly one pub(crate) fn view, found {} public \
             and {} private",
            surface.views, surface.private_views
        ));
    }
    if surface.props.len() != 1 {
        violations.push(format!(
            "{name}: expected one *Props struct, found {:?}",
            surface.props
        ));
    }
    if surface.events.len() != 1 {
        violations.push(format!(
            "{name}: expected one *Event enum, found {:?}",
            surface.events
        ));
    }
    for contract in surface.props.iter().chain(&surface.events) {
        if !contract.starts_with(&prefix) {
            violations.push(format!(
                "{name}: '{contract}' must start with '{prefix}'"
            ));
        }
    }
    if surface.glob_imports > 0 {
        violations.push(format!("{name}: wildcard imports are forbidden"));
    }
}

fn parse(path: &Path) -> File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    matches!(
        vis,
        Visibility::Restricted(restricted)
            if restricted.in_token.is_none()
                && restricted.path.is_ident("crate")
    )
}
