use engine::{
    Balance, BillContext, EngineError, Participant, SettlementEngine, Standing, Transfer,
};

fn transfer(from: &str, to: &str, amount: f64) -> Transfer {
    Transfer {
        from: from.to_string(),
        to: to.to_string(),
        amount,
    }
}

#[test]
fn single_payer_is_reimbursed_by_everyone() {
    let engine = SettlementEngine;
    let participants = vec![
        Participant::new("A", 300.0),
        Participant::new("B", 0.0),
        Participant::new("C", 0.0),
    ];
    let bill = BillContext::new(300.0, false);

    let balances = engine.compute_balances(&participants, &bill).unwrap();
    assert_eq!(
        balances,
        vec![
            Balance::new("A", 200.0),
            Balance::new("B", -100.0),
            Balance::new("C", -100.0),
        ]
    );

    let transfers = engine.compute_settlements(&balances);
    assert_eq!(
        transfers,
        vec![transfer("B", "A", 100.0), transfer("C", "A", 100.0)]
    );
    assert!(!engine.is_settled(&balances));
}

#[test]
fn equal_split_leaves_everyone_owing_with_no_transfers() {
    let engine = SettlementEngine;
    let participants = vec![
        Participant::new("A", 300.0),
        Participant::new("B", 0.0),
        Participant::new("C", 0.0),
    ];
    let bill = BillContext::new(300.0, true);

    let report = engine.settle(&participants, &bill).unwrap();
    assert!(report.balances.iter().all(|b| b.balance == -100.0));
    assert!(
        report
            .balances
            .iter()
            .all(|b| b.standing() == Standing::Owes)
    );
    assert!(report.transfers.is_empty());
    assert!(!report.settled);
    // Total paid still reflects the entered amounts.
    assert_eq!(report.summary.total_paid, 300.0);
    assert!(report.summary.bill_match);
}

#[test]
fn zero_bill_with_nobody_paying_is_settled() {
    let report = SettlementEngine
        .settle(
            &[Participant::new("A", 0.0), Participant::new("B", 0.0)],
            &BillContext::new(0.0, false),
        )
        .unwrap();

    assert!(report.balances.iter().all(|b| b.balance == 0.0));
    assert!(report.transfers.is_empty());
    assert!(report.settled);
    assert!(report.summary.bill_match);
    assert_eq!(report.summary.pending_balance, 0.0);
}

#[test]
fn settle_rejects_an_empty_group() {
    assert_eq!(
        SettlementEngine.settle(&[], &BillContext::new(10.0, false)),
        Err(EngineError::EmptyParticipantSet)
    );
}

#[test]
fn underpaid_bill_surfaces_pending_balance() {
    let participants = vec![Participant::new("A", 90.0), Participant::new("B", 0.0)];
    let report = SettlementEngine
        .settle(&participants, &BillContext::new(100.0, false))
        .unwrap();

    assert_eq!(report.balances[0].balance, 40.0);
    assert_eq!(report.balances[1].balance, -50.0);
    // B covers A's surplus only; the remaining 10 stays pending.
    assert_eq!(report.transfers, vec![transfer("B", "A", 40.0)]);
    assert!(!report.summary.bill_match);
    assert_eq!(report.summary.pending_balance, 10.0);
}

#[test]
fn form_input_is_normalized() {
    let participants = vec![
        Participant::from_input("A", "60"),
        Participant::from_input("B", ""),
        Participant::from_input("C", "abc"),
    ];
    let bill = BillContext::from_input("60.00", false);

    let report = SettlementEngine.settle(&participants, &bill).unwrap();
    assert_eq!(report.summary.total_paid, 60.0);
    assert_eq!(
        report.transfers,
        vec![transfer("B", "A", 20.0), transfer("C", "A", 20.0)]
    );
}

#[test]
fn sub_cent_rounding_noise_is_settled() {
    // 100 / 3 does not divide evenly; the leftovers stay within tolerance.
    let participants = vec![
        Participant::new("A", 33.33),
        Participant::new("B", 33.33),
        Participant::new("C", 33.34),
    ];
    let report = SettlementEngine
        .settle(&participants, &BillContext::new(100.0, false))
        .unwrap();
    assert!(report.settled);
    assert!(report.transfers.is_empty());
}

#[test]
fn every_transfer_is_positive_and_bounded() {
    let participants = vec![
        Participant::new("A", 120.0),
        Participant::new("B", 15.5),
        Participant::new("C", 0.0),
        Participant::new("D", 64.5),
        Participant::new("E", 0.0),
    ];
    let bill = BillContext::new(200.0, false);
    let balances = SettlementEngine
        .compute_balances(&participants, &bill)
        .unwrap();
    let transfers = SettlementEngine.compute_settlements(&balances);

    let mut remaining: Vec<f64> = balances.iter().map(|b| b.balance).collect();
    for t in &transfers {
        assert!(t.amount > 0.0);
        let from = balances.iter().position(|b| b.name == t.from).unwrap();
        let to = balances.iter().position(|b| b.name == t.to).unwrap();
        assert_ne!(from, to);
        assert!(t.amount <= -remaining[from] + 1e-9);
        assert!(t.amount <= remaining[to] + 1e-9);
        remaining[from] += t.amount;
        remaining[to] -= t.amount;
    }
    assert!(remaining.iter().all(|r| r.abs() <= 0.01));
}

#[test]
fn extreme_amounts_keep_balances_finite() {
    let participants = vec![Participant::new("A", f64::MAX), Participant::new("B", -f64::MAX)];
    let report = SettlementEngine
        .settle(&participants, &BillContext::new(-f64::MAX, false))
        .unwrap();

    assert!(report.balances.iter().all(|b| b.balance.is_finite()));
    assert!(report.transfers.iter().all(|t| t.amount.is_finite()));
}
