use sqlclause::prelude::*;

#[test]
fn test_prelude_builds_static_statement() {
    let users = Table::new("users");
    let stmt = from(users).unwrap();
    assert_eq!(stmt.to_sql(), " FROM users");
}

#[test]
fn test_prelude_builds_dynamic_statement() {
    let a = Table::new("a");
    let b = Table::new("b");
    let c = Table::new("c");

    let mut stmt = Statement::dynamic().dynamic_from(a.clone()).unwrap();
    let clause = stmt.from_clause_mut().unwrap();
    clause
        .add(dynamic_join(b.clone()).on(eq(a.col("id"), b.col("a_id"))))
        .unwrap();
    clause
        .add(dynamic_join(c.clone()).on(eq(a.col("id"), c.col("a_id"))))
        .unwrap();

    assert_eq!(
        stmt.to_sql(),
        " FROM a JOIN b ON a.id = b.a_id JOIN c ON a.id = c.a_id"
    );
}

#[test]
fn test_prelude_errors_are_matchable() {
    let a = Table::new("a");
    let err = from(cross_join(a.clone(), a.alias("a"))).unwrap_err();
    assert!(matches!(err, ClauseError::DuplicateTableName { .. }));
}
