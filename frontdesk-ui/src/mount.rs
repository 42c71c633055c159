//! Mounting
//!
//! Attaches independent component trees to the mount points the hosting
//! document provides. Missing mount points are skipped.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::components::Counter;
use crate::config::AppConfig;
use crate::i18n::I18n;

/// Component trees the entry point can mount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tree {
    /// Application shell with routing and the dashboard
    Shell,
    /// Standalone counter widget
    Counter,
}

/// Element id and the tree mounted into it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountPoint {
    pub id: &'static str,
    pub tree: Tree,
}

/// Mount points of the front end
pub fn mount_points(config: &AppConfig) -> [MountPoint; 2] {
    [
        MountPoint {
            id: config.root_mount_id,
            tree: Tree::Shell,
        },
        MountPoint {
            id: config.counter_mount_id,
            tree: Tree::Counter,
        },
    ]
}

/// Document the trees are mounted into
pub trait MountHost {
    type Target;

    /// Element with the given id, if the document has one
    fn find(&self, id: &str) -> Option<Self::Target>;

    /// Attach `tree` under `target` with its own rendering root
    fn attach(&self, target: Self::Target, tree: Tree);
}

/// Mount every tree whose mount point exists; returns the attached trees
pub fn mount_all<H: MountHost>(host: &H, points: &[MountPoint]) -> Vec<Tree> {
    let mut attached = Vec::with_capacity(points.len());

    for point in points {
        match host.find(point.id) {
            Some(target) => {
                host.attach(target, point.tree);
                tracing::debug!("Mounted {:?} into #{}", point.tree, point.id);
                attached.push(point.tree);
            }
            None => {
                tracing::debug!("No #{} element, skipping {:?}", point.id, point.tree);
            }
        }
    }

    attached
}

/// The page's real document
pub struct BrowserHost {
    document: Option<web_sys::Document>,
    i18n: I18n,
    base: &'static str,
}

impl BrowserHost {
    pub fn new(config: &AppConfig, i18n: I18n) -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
            i18n,
            base: config.base_path,
        }
    }
}

impl MountHost for BrowserHost {
    type Target = web_sys::HtmlElement;

    fn find(&self, id: &str) -> Option<Self::Target> {
        self.document
            .as_ref()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }

    fn attach(&self, target: Self::Target, tree: Tree) {
        match tree {
            Tree::Shell => {
                let i18n = self.i18n.clone();
                let base = self.base;
                mount_to(target, move || view! { <App i18n=i18n base=base /> });
            }
            Tree::Counter => mount_to(target, || view! { <Counter /> }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeHost {
        ids: Vec<&'static str>,
        attached: RefCell<Vec<(String, Tree)>>,
    }

    impl FakeHost {
        fn with_ids(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                attached: RefCell::new(Vec::new()),
            }
        }
    }

    impl MountHost for FakeHost {
        type Target = String;

        fn find(&self, id: &str) -> Option<String> {
            self.ids.iter().any(|known| *known == id).then(|| id.to_string())
        }

        fn attach(&self, target: String, tree: Tree) {
            self.attached.borrow_mut().push((target, tree));
        }
    }

    #[test]
    fn test_mounts_both_trees() {
        let host = FakeHost::with_ids(&["root", "counter"]);
        let attached = mount_all(&host, &mount_points(&AppConfig::default()));

        assert_eq!(attached, vec![Tree::Shell, Tree::Counter]);
        assert_eq!(
            *host.attached.borrow(),
            vec![
                ("root".to_string(), Tree::Shell),
                ("counter".to_string(), Tree::Counter)
            ]
        );
    }

    #[test]
    fn test_missing_mount_point_is_skipped() {
        let host = FakeHost::with_ids(&["counter"]);
        let attached = mount_all(&host, &mount_points(&AppConfig::default()));
        assert_eq!(attached, vec![Tree::Counter]);
        assert_eq!(host.attached.borrow().len(), 1);

        let host = FakeHost::with_ids(&["root", "sidebar"]);
        let attached = mount_all(&host, &mount_points(&AppConfig::default()));
        assert_eq!(attached, vec![Tree::Shell]);
    }

    #[test]
    fn test_empty_document() {
        let host = FakeHost::with_ids(&[]);
        assert!(mount_all(&host, &mount_points(&AppConfig::default())).is_empty());
        assert!(host.attached.borrow().is_empty());
    }
}
