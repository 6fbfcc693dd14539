use sqlclause_core::{
    Capability, Clause, ClauseError, Statement, Table, ToSQL, cross_join, dynamic_cross_join,
    dynamic_inner_join, dynamic_left_join, eq, from, inner_join, left_join,
};

fn tables() -> (Table, Table, Table) {
    (Table::new("a"), Table::new("b"), Table::new("c"))
}

#[test]
fn test_from_single_table() {
    let (a, _, _) = tables();
    let stmt = from(a).unwrap();
    assert_eq!(stmt.to_sql(), " FROM a");

    let clause = stmt.from_clause().unwrap();
    assert!(!clause.is_dynamic());
    assert!(clause.data().dynamic_tables().is_empty());
}

#[test]
fn test_from_aliased_table() {
    let users = Table::new("users").alias("u");
    let stmt = from(users).unwrap();
    assert_eq!(stmt.to_sql(), " FROM users AS u");
}

#[test]
fn test_from_join() {
    let (a, b, _) = tables();
    let stmt = from(inner_join(a.clone(), b.clone()).on(eq(a.col("id"), b.col("a_id")))).unwrap();
    assert_eq!(stmt.to_sql(), " FROM a INNER JOIN b ON a.id = b.a_id");
}

#[test]
fn test_from_rejects_unresolved_dependency() {
    let (a, b, c) = tables();

    let joined = inner_join(a.clone(), b.clone()).on(eq(b.col("a_id"), c.col("id")));
    let err = from(joined).unwrap_err();
    match err {
        ClauseError::UnresolvedTableDependency { tables, .. } => {
            assert!(tables.contains("c"));
            assert!(!tables.contains("a"));
        }
        other => panic!("unexpected error: {other}"),
    }

    // Nested joins propagate what their inner conditions require.
    let inner = inner_join(a.clone(), b.clone()).on(eq(a.col("id"), c.col("a_id")));
    let outer = inner_join(inner, Table::new("d")).on(eq(a.col("id"), b.col("a_id")));
    match from(outer) {
        Err(ClauseError::UnresolvedTableDependency { tables, .. }) => {
            assert_eq!(tables.to_string(), "c");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_from_rejects_condition_on_a_later_join() {
    let (a, b, c) = tables();

    // The inner ON names `c`, which only the enclosing join brings in.
    let inner = inner_join(a.clone(), b.clone()).on(eq(a.col("id"), c.col("a_id")));
    let outer = inner_join(inner, c.clone()).on(eq(b.col("id"), c.col("b_id")));
    match from(outer) {
        Err(ClauseError::UnresolvedTableDependency { tables, .. }) => {
            assert_eq!(tables.to_string(), "c");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_from_rejects_join_containing_dynamic_join() {
    let (a, b, _) = tables();
    let err = from(cross_join(a, dynamic_cross_join(b))).unwrap_err();
    match err {
        ClauseError::InvalidArgumentCapability {
            expected, found, ..
        } => {
            assert_eq!(expected, Capability::Table);
            assert_eq!(found, "a CROSS JOIN CROSS JOIN b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_add_rejects_dynamic_join_nested_in_dynamic_join() {
    let (a, b, _) = tables();
    let mut stmt = Statement::dynamic().dynamic_from(a).unwrap();
    let clause = stmt.from_clause_mut().unwrap();

    let err = clause
        .add(dynamic_cross_join(dynamic_cross_join(b)))
        .unwrap_err();
    assert!(matches!(
        err,
        ClauseError::InvalidArgumentCapability {
            expected: Capability::DynamicJoin,
            ..
        }
    ));
    assert!(clause.data().dynamic_tables().is_empty());
    assert_eq!(stmt.to_sql(), " FROM a");
}

#[test]
fn test_from_rejects_dynamic_join_as_static_table() {
    let (_, b, _) = tables();
    let err = from(dynamic_cross_join(b)).unwrap_err();
    match err {
        ClauseError::InvalidArgumentCapability {
            expected, found, ..
        } => {
            assert_eq!(expected, Capability::Table);
            assert_eq!(found, "CROSS JOIN b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_rejects_duplicate_table_name() {
    let first = Table::new("users").alias("x");
    let second = Table::new("orders").alias("x");
    let err = from(cross_join(first, second)).unwrap_err();
    match err {
        ClauseError::DuplicateTableName { names, .. } => assert!(names.contains("x")),
        other => panic!("unexpected error: {other}"),
    }

    // An alias colliding with a plain table name.
    let err = from(cross_join(Table::new("a"), Table::new("b").alias("a"))).unwrap_err();
    assert!(matches!(err, ClauseError::DuplicateTableName { .. }));
}

#[test]
fn test_from_rejects_duplicate_table_reference() {
    let (a, _, _) = tables();
    let err = from(cross_join(a.clone(), a.clone())).unwrap_err();
    match err {
        ClauseError::DuplicateTableReference { tables, .. } => assert!(tables.contains("a")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_rejects_non_table_arguments() {
    let (a, b, _) = tables();

    let err = from(a.col("id")).unwrap_err();
    assert!(matches!(
        err,
        ClauseError::InvalidArgumentCapability {
            expected: Capability::Table,
            ..
        }
    ));

    let err = from(eq(a.col("id"), 1)).unwrap_err();
    assert!(matches!(err, ClauseError::InvalidArgumentCapability { .. }));

    // A join is not a table until its condition is supplied.
    let err = from(left_join(a, b)).unwrap_err();
    match err {
        ClauseError::InvalidArgumentCapability { found, .. } => {
            assert_eq!(found, "a LEFT JOIN b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_dynamic_from_requires_dynamic_statement() {
    let (a, _, _) = tables();
    let err = Statement::new().dynamic_from(a.clone()).unwrap_err();
    assert!(matches!(err, ClauseError::DynamicNotAllowed { .. }));

    let stmt = Statement::dynamic().dynamic_from(a).unwrap();
    assert!(stmt.from_clause().unwrap().is_dynamic());
    assert_eq!(stmt.to_sql(), " FROM a");
}

#[test]
fn test_dynamic_from_runs_the_same_checks() {
    let (a, _, _) = tables();
    let err = Statement::dynamic()
        .dynamic_from(cross_join(a.clone(), a))
        .unwrap_err();
    assert!(matches!(err, ClauseError::DuplicateTableReference { .. }));
}

#[test]
fn test_add_to_static_clause_fails() {
    let (a, b, _) = tables();
    let mut stmt = from(a.clone()).unwrap();
    let clause = stmt.from_clause_mut().unwrap();

    let valid = dynamic_inner_join(b.clone()).on(eq(a.col("id"), b.col("a_id")));
    assert!(matches!(
        clause.add(valid),
        Err(ClauseError::StaticClauseNotAppendable { .. })
    ));

    // Argument validity does not matter.
    assert!(matches!(
        clause.add(a.col("id")),
        Err(ClauseError::StaticClauseNotAppendable { .. })
    ));

    // The dynamic-capable flag on the statement does not matter either.
    let mut stmt = Statement::dynamic().from(a.clone()).unwrap();
    assert!(matches!(
        stmt.from_clause_mut().unwrap().add(dynamic_cross_join(b)),
        Err(ClauseError::StaticClauseNotAppendable { .. })
    ));
}

#[test]
fn test_add_appends_in_order() {
    let (a, b, c) = tables();
    let mut stmt = Statement::dynamic().dynamic_from(a.clone()).unwrap();
    let clause = stmt.from_clause_mut().unwrap();

    clause
        .add(dynamic_inner_join(b.clone()).on(eq(a.col("id"), b.col("a_id"))))
        .unwrap();
    clause
        .add(dynamic_left_join(c.clone()).on(eq(a.col("id"), c.col("a_id"))))
        .unwrap();

    assert_eq!(clause.data().dynamic_tables().len(), 2);
    assert_eq!(
        stmt.to_sql(),
        " FROM a INNER JOIN b ON a.id = b.a_id LEFT JOIN c ON a.id = c.a_id"
    );
}

#[test]
fn test_add_may_reference_earlier_fragments() {
    let (a, b, c) = tables();
    let mut stmt = Statement::dynamic().dynamic_from(a.clone()).unwrap();
    let clause = stmt.from_clause_mut().unwrap();

    clause
        .add(dynamic_inner_join(b.clone()).on(eq(a.col("id"), b.col("a_id"))))
        .unwrap();
    clause
        .add(dynamic_inner_join(c.clone()).on(eq(b.col("id"), c.col("b_id"))))
        .unwrap();

    assert_eq!(clause.data().provided_tables().len(), 3);
}

#[test]
fn test_add_rejects_unresolved_dependency() {
    let (a, b, c) = tables();
    let mut stmt = Statement::dynamic().dynamic_from(a).unwrap();
    let clause = stmt.from_clause_mut().unwrap();

    let err = clause
        .add(dynamic_inner_join(b.clone()).on(eq(c.col("id"), b.col("c_id"))))
        .unwrap_err();
    assert!(matches!(err, ClauseError::UnresolvedTableDependency { .. }));
    assert!(clause.data().dynamic_tables().is_empty());
}

#[test]
fn test_add_rejects_name_collision_without_change() {
    let (a, b, _) = tables();
    let mut stmt = Statement::dynamic().dynamic_from(a.clone()).unwrap();
    let clause = stmt.from_clause_mut().unwrap();

    clause
        .add(dynamic_inner_join(b.clone()).on(eq(a.col("id"), b.col("a_id"))))
        .unwrap();
    let before = clause.data().dynamic_tables().len();

    // Collides with the static table.
    let err = clause.add(dynamic_cross_join(Table::new("other").alias("a")));
    assert!(matches!(err, Err(ClauseError::DuplicateTableName { .. })));

    // Collides with an earlier fragment.
    let err = clause.add(dynamic_cross_join(b.clone()));
    match err {
        Err(ClauseError::DuplicateTableName { names, .. }) => assert!(names.contains("b")),
        other => panic!("unexpected result: {other:?}"),
    }

    assert_eq!(clause.data().dynamic_tables().len(), before);
    assert_eq!(stmt.to_sql(), " FROM a INNER JOIN b ON a.id = b.a_id");
}

#[test]
fn test_add_rejects_non_dynamic_fragments() {
    let (a, b, c) = tables();
    let mut stmt = Statement::dynamic().dynamic_from(a.clone()).unwrap();
    let clause = stmt.from_clause_mut().unwrap();

    let err = clause.add(b.clone()).unwrap_err();
    assert!(matches!(
        err,
        ClauseError::InvalidArgumentCapability {
            expected: Capability::DynamicJoin,
            ..
        }
    ));

    let static_join = inner_join(b.clone(), c).on(eq(a.col("id"), b.col("a_id")));
    assert!(matches!(
        clause.add(static_join),
        Err(ClauseError::InvalidArgumentCapability { .. })
    ));

    // Unfinished dynamic join.
    assert!(matches!(
        clause.add(dynamic_inner_join(b)),
        Err(ClauseError::InvalidArgumentCapability { .. })
    ));
    assert!(clause.data().dynamic_tables().is_empty());
}

#[test]
fn test_add_rejects_fragment_listing_a_table_twice() {
    let (a, b, _) = tables();
    let mut stmt = Statement::dynamic().dynamic_from(a).unwrap();
    let clause = stmt.from_clause_mut().unwrap();

    let err = clause
        .add(dynamic_cross_join(cross_join(b.clone(), b)))
        .unwrap_err();
    assert!(matches!(err, ClauseError::DuplicateTableReference { .. }));
}

#[test]
fn test_rendering_is_repeatable() {
    let (a, b, _) = tables();
    let mut stmt = Statement::dynamic().dynamic_from(a.clone()).unwrap();
    stmt.from_clause_mut()
        .unwrap()
        .add(dynamic_inner_join(b.clone()).on(eq(a.col("id"), b.col("a_id"))))
        .unwrap();

    assert_eq!(stmt.to_sql(), stmt.to_sql());
}

#[test]
fn test_from_twice_is_rejected() {
    let (a, b, _) = tables();
    let stmt = from(a).unwrap();
    let err = stmt.from(b).unwrap_err();
    assert!(matches!(err, ClauseError::ClauseAlreadyPresent { .. }));
}

#[test]
fn test_transitions_leave_the_original_untouched() {
    let (a, _, _) = tables();
    let empty = Statement::dynamic();
    let with_from = empty.dynamic_from(a).unwrap();

    assert!(empty.from_clause().is_none());
    assert_eq!(empty.to_sql(), "");
    assert_eq!(with_from.to_sql(), " FROM a");
    assert!(with_from.is_dynamic());
}

#[test]
fn test_cloned_statements_do_not_share_fragments() {
    let (a, b, _) = tables();
    let original = Statement::dynamic().dynamic_from(a.clone()).unwrap();
    let mut extended = original.clone();
    extended
        .from_clause_mut()
        .unwrap()
        .add(dynamic_inner_join(b.clone()).on(eq(a.col("id"), b.col("a_id"))))
        .unwrap();

    assert_eq!(original.to_sql(), " FROM a");
    assert_eq!(extended.to_sql(), " FROM a INNER JOIN b ON a.id = b.a_id");
}

#[test]
fn test_error_messages() {
    let (a, _, _) = tables();
    let err = from(cross_join(a.clone(), a)).unwrap_err();
    assert_eq!(err.to_string(), "duplicate table in from(): a");

    let err = Statement::new().dynamic_from(Table::new("t")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "dynamic_from() must not be called on a static statement"
    );

    let (a, b, _) = tables();
    let mut stmt = from(a.clone()).unwrap();
    let err = stmt
        .from_clause_mut()
        .unwrap()
        .add(dynamic_cross_join(b.clone()))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "from::add() must not be called on a static from clause"
    );

    let mut stmt = Statement::dynamic().dynamic_from(a).unwrap();
    let err = stmt
        .from_clause_mut()
        .unwrap()
        .add(dynamic_cross_join(b.alias("a")))
        .unwrap_err();
    assert_eq!(err.to_string(), "duplicate table name in from::add(): a");

    let err = stmt.from(Table::new("t")).unwrap_err();
    assert_eq!(err.to_string(), "FROM clause is already present in this statement");
}
