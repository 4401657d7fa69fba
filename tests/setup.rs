//! Game setup integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use deckrs::{
    Card, DealError, DealOrder, Dealer, FisherYates, Hand, OrderedDealer, SetupOptions, Shuffler,
    Table, deal_cards, setup_game, standard_deck,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Shuffle { returned: Vec<Card> },
    Deal {
        cards: Vec<Card>,
        hand_size: usize,
        players: usize,
    },
}

type CallLog = Rc<RefCell<Vec<Call>>>;

/// Wraps the real shuffler and records what it returned.
struct ShuffleSpy {
    inner: FisherYates,
    log: CallLog,
}

impl Shuffler for ShuffleSpy {
    fn shuffle(&mut self, cards: &[Card]) -> Vec<Card> {
        let returned = self.inner.shuffle(cards);
        self.log.borrow_mut().push(Call::Shuffle {
            returned: returned.clone(),
        });
        returned
    }
}

/// Wraps the real dealer and records its arguments.
struct DealSpy {
    inner: OrderedDealer,
    log: CallLog,
}

impl Dealer for DealSpy {
    fn deal(
        &mut self,
        cards: &[Card],
        hand_size: usize,
        number_of_players: usize,
    ) -> Result<Vec<Hand>, DealError> {
        self.log.borrow_mut().push(Call::Deal {
            cards: cards.to_vec(),
            hand_size,
            players: number_of_players,
        });
        self.inner.deal(cards, hand_size, number_of_players)
    }
}

fn spies(seed: u64) -> (ShuffleSpy, DealSpy, CallLog) {
    let log = CallLog::default();
    let shuffler = ShuffleSpy {
        inner: FisherYates::seeded(seed),
        log: Rc::clone(&log),
    };
    let dealer = DealSpy {
        inner: OrderedDealer::default(),
        log: Rc::clone(&log),
    };
    (shuffler, dealer, log)
}

#[test]
fn shuffles_once_before_dealing() {
    let (mut shuffler, mut dealer, log) = spies(1);

    setup_game(&standard_deck(), 5, 4, &mut shuffler, &mut dealer).unwrap();

    let calls = log.borrow();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::Shuffle { .. }));
    assert!(matches!(calls[1], Call::Deal { .. }));
}

#[test]
fn deals_exactly_what_the_shuffler_returned() {
    let (mut shuffler, mut dealer, log) = spies(2);

    let players = setup_game(&standard_deck(), 5, 3, &mut shuffler, &mut dealer).unwrap();

    let calls = log.borrow();
    let [Call::Shuffle { returned }, Call::Deal { cards, hand_size, players: seats }] =
        calls.as_slice()
    else {
        panic!("unexpected calls: {calls:?}");
    };
    assert_eq!(cards, returned);
    assert_eq!((*hand_size, *seats), (5, 3));

    let expected = deal_cards(returned, 5, 3).unwrap();
    let hands: Vec<Hand> = players.into_iter().map(|player| player.hand).collect();
    assert_eq!(hands, expected);
}

#[test]
fn seats_players_in_hand_order() {
    let mut shuffler: FisherYates = FisherYates::seeded(3);
    let players = setup_game(
        &standard_deck(),
        4,
        3,
        &mut shuffler,
        &mut OrderedDealer::default(),
    )
    .unwrap();

    assert_eq!(players.len(), 3);
    for (index, player) in players.iter().enumerate() {
        assert_eq!(player.id, index + 1);
        assert_eq!(player.hand.len(), 4);
        assert_eq!(player.current_turn, player.id == 1);
    }
    assert_eq!(players.iter().filter(|p| p.current_turn).count(), 1);
}

#[test]
fn deal_errors_pass_through_unchanged() {
    let (mut shuffler, mut dealer, log) = spies(4);

    let err = setup_game(&standard_deck(), 10, 8, &mut shuffler, &mut dealer).unwrap_err();

    assert_eq!(
        err,
        DealError::InsufficientCards {
            needed: 80,
            available: 52
        }
    );
    // The shuffle still happened first.
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn setup_does_not_modify_the_deck() {
    let deck = standard_deck();
    let before = deck.clone();
    let mut table = Table::new(SetupOptions::default(), 5);

    table.setup(&deck).unwrap();
    assert_eq!(deck, before);
}

#[test]
fn table_uses_its_options() {
    let options = SetupOptions::default()
        .with_hand_size(13)
        .with_players(4)
        .with_deal_order(DealOrder::RoundRobin);
    let mut table = Table::new(options, 6);
    assert_eq!(table.options(), &options);
    assert_eq!(options.cards_needed(), Some(52));

    let players = table.setup(&standard_deck()).unwrap();
    assert_eq!(players.len(), 4);
    assert!(players.iter().all(|player| player.hand.len() == 13));

    let too_many = Table::new(options.with_players(5), 6).setup(&standard_deck());
    assert_eq!(
        too_many.unwrap_err(),
        DealError::InsufficientCards {
            needed: 65,
            available: 52
        }
    );
}

#[test]
fn table_reseed_replays_games() {
    let deck = standard_deck();
    let mut table = Table::new(SetupOptions::default(), 77);

    let first = table.setup(&deck).unwrap();
    let second = table.setup(&deck).unwrap();
    assert_ne!(first, second);

    table.reseed(77);
    assert_eq!(table.setup(&deck).unwrap(), first);
}

#[test]
fn options_builder_sets_fields() {
    let options = SetupOptions::default();
    assert_eq!(options.hand_size, 5);
    assert_eq!(options.players, 4);
    assert_eq!(options.deal_order, DealOrder::Block);

    let options = options
        .with_hand_size(7)
        .with_players(2)
        .with_deal_order(DealOrder::RoundRobin);
    assert_eq!(options.hand_size, 7);
    assert_eq!(options.players, 2);
    assert_eq!(options.deal_order, DealOrder::RoundRobin);
    assert_eq!(options.with_hand_size(usize::MAX).cards_needed(), None);
}

#[cfg(feature = "json")]
#[test]
fn players_serialize_with_camel_case_keys() {
    let player = deckrs::Player {
        id: 1,
        hand: Hand::new(vec![Card::from("♠A"), Card::from("♥K")]),
        current_turn: true,
    };

    assert_eq!(
        serde_json::to_value(&player).unwrap(),
        serde_json::json!({ "id": 1, "hand": ["♠A", "♥K"], "currentTurn": true })
    );
}
