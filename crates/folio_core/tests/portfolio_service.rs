use folio_core::{
    Catalog, CommitOutcome, MemorySurface, PortfolioService, ProjectPatch,
    ProjectRecord,
};

fn sample_catalog() -> Catalog {
    Catalog::from_records(vec![
        ProjectRecord::new("A", "d", "r1")
            .with_technologies(["X", "Y"])
            .with_icon("⚙️"),
        ProjectRecord::new("B", "e", "r2").with_live_link("l2"),
    ])
}

#[test]
fn render_projects_commits_full_projection() {
    let mut service = PortfolioService::new(sample_catalog(), MemorySurface::new());

    let outcome = service.render_projects().unwrap();

    assert_eq!(outcome, CommitOutcome::Committed);
    assert_eq!(
        service.surface().content(),
        Some(service.projection().to_markup().as_str())
    );
    assert_eq!(service.surface().commits(), 1);
}

#[test]
fn add_project_appends_and_rerenders() {
    let mut service = PortfolioService::new(sample_catalog(), MemorySurface::new());
    service.render_projects().unwrap();

    service
        .add_project(ProjectRecord::new("C", "f", "r3"))
        .unwrap();

    assert_eq!(service.catalog().len(), 3);
    assert_eq!(service.catalog().get(2).unwrap().title, "C");
    assert_eq!(service.surface().commits(), 2);
    let content = service.surface().content().unwrap();
    let a = content.find(">A</h3>").unwrap();
    let b = content.find(">B</h3>").unwrap();
    let c = content.find(">C</h3>").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn update_project_merges_patch_and_rerenders() {
    let mut service = PortfolioService::new(sample_catalog(), MemorySurface::new());

    let outcome = service.update_project(0, ProjectPatch::title("X")).unwrap();

    assert_eq!(outcome, Some(CommitOutcome::Committed));
    let updated = service.catalog().get(0).unwrap();
    assert_eq!(updated.title, "X");
    assert_eq!(updated.description, "d");
    assert_eq!(updated.technologies, vec!["X", "Y"]);
    assert_eq!(updated.repo_link, "r1");
    assert_eq!(updated.icon, "⚙️");
    assert_eq!(service.catalog().get(1), sample_catalog().get(1));
    assert!(service.surface().content().unwrap().contains(">X</h3>"));
}

#[test]
fn update_project_can_add_and_clear_live_link() {
    let mut service = PortfolioService::new(sample_catalog(), MemorySurface::new());

    let add_link = ProjectPatch {
        live_link: Some(Some("l1".to_string())),
        ..ProjectPatch::default()
    };
    service.update_project(0, add_link).unwrap();
    assert!(service.catalog().get(0).unwrap().has_live_link());

    let clear_link = ProjectPatch {
        live_link: Some(None),
        ..ProjectPatch::default()
    };
    service.update_project(1, clear_link).unwrap();
    assert!(!service.catalog().get(1).unwrap().has_live_link());
    assert_eq!(
        service.surface().content().unwrap().matches("<a ").count(),
        3
    );
}

#[test]
fn update_project_out_of_range_is_silent_noop() {
    let mut service = PortfolioService::new(sample_catalog(), MemorySurface::new());
    service.render_projects().unwrap();
    let rendered = service.surface().content().unwrap().to_string();

    let outcome = service.update_project(2, ProjectPatch::title("X")).unwrap();

    assert_eq!(outcome, None);
    assert_eq!(service.catalog(), &sample_catalog());
    assert_eq!(service.surface().content(), Some(rendered.as_str()));
    assert_eq!(service.surface().commits(), 1);
}

#[test]
fn missing_container_is_noop_but_catalog_still_mutates() {
    let mut service = PortfolioService::new(sample_catalog(), MemorySurface::detached());

    let outcome = service
        .add_project(ProjectRecord::new("C", "f", "r3"))
        .unwrap();

    assert_eq!(outcome, CommitOutcome::ContainerMissing);
    assert_eq!(service.catalog().len(), 3);
    assert_eq!(service.surface().content(), None);
}

#[test]
fn service_accepts_borrowed_surface() {
    let mut surface = MemorySurface::new();
    {
        let mut service = PortfolioService::new(sample_catalog(), &mut surface);
        service.render_projects().unwrap();
    }
    assert_eq!(surface.commits(), 1);
}

#[test]
fn into_parts_returns_mutated_catalog() {
    let mut service = PortfolioService::new(Catalog::new(), MemorySurface::new());
    service
        .add_project(ProjectRecord::new("A", "d", "r1"))
        .unwrap();

    let (catalog, surface) = service.into_parts();
    assert_eq!(catalog.len(), 1);
    assert_eq!(surface.commits(), 1);
}
