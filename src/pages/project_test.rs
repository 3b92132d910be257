use super::*;

#[test]
fn cards_with_a_screenshot_get_a_transparent_preview() {
    for project in PROJECTS {
        match project.image {
            Some(_) => assert_eq!(project.preview_background(), "transparent", "{}", project.title),
            None => assert!(project.preview_background().starts_with("linear-gradient"), "{}", project.title),
        }
    }
}

#[test]
fn todo_list_card_links_to_its_deployment_and_repository() {
    let todo = PROJECTS.iter().find(|p| p.title == "Todo-List").unwrap();
    assert_eq!(todo.live_url, "https://7sadakonr-todo-list.vercel.app");
    assert_eq!(todo.github_url, "https://github.com/7sadakonr/Todo-List");
    assert_eq!(todo.image, Some("/assets/img/todo-list.png"));
}

#[test]
fn every_card_lists_its_stack() {
    assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
}
