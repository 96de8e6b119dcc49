//! Project view of the roster.
//!
//! Projects are plain names on each member, so grouping matches names
//! exactly. A project renamed on one member forms a separate group.

use serde::Serialize;

use super::TeamMember;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGroup {
    pub name: String,
    pub member_ids: Vec<String>,
}

/// Groups members by project, in first-seen project order.
pub fn group_by_project(members: &[TeamMember]) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = Vec::new();

    for member in members {
        for project in &member.projects {
            match groups.iter_mut().find(|g| &g.name == project) {
                Some(group) => {
                    if !group.member_ids.contains(&member.id) {
                        group.member_ids.push(member.id.clone());
                    }
                }
                None => groups.push(ProjectGroup {
                    name: project.clone(),
                    member_ids: vec![member.id.clone()],
                }),
            }
        }
    }

    groups
}
