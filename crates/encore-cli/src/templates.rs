pub const EVENT_YAML: &str = r#"version: 1
event: spring-showcase
judges:
  - judge_id: 1
    name: Ada
    email: ada@example.com
    password: change-me
    weight: 1.0
  - judge_id: 2
    name: Ben
    email: ben@example.com
    password: change-me
    weight: 2.0
performers:
  - id: 10
    name: The Sparks
  - id: 20
    name: Night Owls
"#;
