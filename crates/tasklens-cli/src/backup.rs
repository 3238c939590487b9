//! Backup document traversal.

use indexmap::IndexMap;
use roxmltree::{Document, Node};
use smol_str::SmolStr;
use tasklens_decode::RecordKind;
use thiserror::Error;

/// Root element of a backup document.
pub const ROOT_TAG: &str = "TaskerData";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("not a backup document: root element is <{0}>, expected <TaskerData>")]
    UnexpectedRoot(SmolStr),
}

/// A project and the ids it owns, in the order the backup lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectView {
    pub name: SmolStr,
    pub profile_ids: Vec<SmolStr>,
    pub task_ids: Vec<SmolStr>,
    pub scene_names: Vec<SmolStr>,
}

/// Index over one parsed backup.
#[derive(Debug)]
pub struct Backup<'a, 'input> {
    pub projects: Vec<ProjectView>,
    profiles: IndexMap<SmolStr, Node<'a, 'input>>,
    tasks: IndexMap<SmolStr, Node<'a, 'input>>,
    scenes: Vec<SmolStr>,
}

impl<'a, 'input> Backup<'a, 'input> {
    pub fn index(doc: &'a Document<'input>) -> Result<Self, BackupError> {
        let root = doc.root_element();
        if root.tag_name().name() != ROOT_TAG {
            return Err(BackupError::UnexpectedRoot(root.tag_name().name().into()));
        }

        let mut backup = Self {
            projects: Vec::new(),
            profiles: IndexMap::new(),
            tasks: IndexMap::new(),
            scenes: Vec::new(),
        };
        for child in root.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Project" => backup.projects.push(ProjectView {
                    name: text_of(child, "name").unwrap_or_default().into(),
                    profile_ids: id_list(child, "pids"),
                    task_ids: id_list(child, "tids"),
                    scene_names: id_list(child, "scenes"),
                }),
                "Profile" => {
                    if let Some(id) = text_of(child, "id") {
                        backup.profiles.insert(id.into(), child);
                    }
                }
                "Task" => {
                    if let Some(id) = text_of(child, "id") {
                        backup.tasks.insert(id.into(), child);
                    }
                }
                "Scene" => {
                    if let Some(name) = text_of(child, "nme") {
                        backup.scenes.push(name.into());
                    }
                }
                _ => {}
            }
        }
        tracing::debug!(
            projects = backup.projects.len(),
            profiles = backup.profiles.len(),
            tasks = backup.tasks.len(),
            scenes = backup.scenes.len(),
            "indexed backup"
        );
        Ok(backup)
    }

    #[must_use]
    pub fn profile(&self, id: &str) -> Option<Node<'a, 'input>> {
        self.profiles.get(id).copied()
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<Node<'a, 'input>> {
        self.tasks.get(id).copied()
    }

    #[must_use]
    pub fn scene_names(&self) -> &[SmolStr] {
        &self.scenes
    }

    /// Profiles no project lists.
    #[must_use]
    pub fn unassigned_profiles(&self) -> Vec<SmolStr> {
        self.profiles
            .keys()
            .filter(|id| !self.projects.iter().any(|p| p.profile_ids.contains(*id)))
            .cloned()
            .collect()
    }

    /// Tasks no project lists and no profile runs.
    #[must_use]
    pub fn unassigned_tasks(&self) -> Vec<SmolStr> {
        self.tasks
            .keys()
            .filter(|id| !self.projects.iter().any(|p| p.task_ids.contains(*id)))
            .filter(|id| {
                !self.profiles.values().any(|profile| {
                    profile_task_ids(*profile)
                        .iter()
                        .any(|(_, task)| task == *id)
                })
            })
            .cloned()
            .collect()
    }
}

/// Display name of a profile or task.
#[must_use]
pub fn display_name(node: Node<'_, '_>) -> String {
    text_of(node, "nme").map_or_else(
        || {
            let id = text_of(node, "id").unwrap_or("?");
            format!("Anonymous #{id}")
        },
        str::to_string,
    )
}

/// Which slot of a profile a task is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSlot {
    Entry,
    Exit,
}

impl TaskSlot {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Entry => "Entry Task",
            Self::Exit => "Exit Task",
        }
    }
}

/// Entry (`mid0`) and exit (`mid1`) task ids of a profile.
#[must_use]
pub fn profile_task_ids(profile: Node<'_, '_>) -> Vec<(TaskSlot, SmolStr)> {
    [(TaskSlot::Entry, "mid0"), (TaskSlot::Exit, "mid1")]
        .into_iter()
        .filter_map(|(slot, tag)| text_of(profile, tag).map(|id| (slot, SmolStr::new(id))))
        .collect()
}

/// State and Event children of a profile, with their record kind.
#[must_use]
pub fn profile_conditions<'a, 'input>(
    profile: Node<'a, 'input>,
) -> Vec<(Node<'a, 'input>, RecordKind)> {
    profile
        .children()
        .filter_map(|child| match child.tag_name().name() {
            "State" if child.is_element() => Some((child, RecordKind::State)),
            "Event" if child.is_element() => Some((child, RecordKind::Event)),
            _ => None,
        })
        .collect()
}

fn text_of<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn id_list(node: Node<'_, '_>, name: &str) -> Vec<SmolStr> {
    text_of(node, name)
        .map(|text| {
            text.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(SmolStr::new)
                .collect()
        })
        .unwrap_or_default()
}
