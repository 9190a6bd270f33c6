use patterns_recipe::decorator::{CoffeeMachine, EnhancedCoffeeMachine, NormalCoffeeMachine};
use patterns_recipe::facade::{User, UserRepository};
use patterns_recipe::mock::{MockCoffeeMachine, MockFile};
use patterns_recipe::protection_proxy::{File, FileError, NormalFile, SecuredFile};

/// Decorator: non-overridden behaviour is delegated, overridden behaviour differs
/// from the wrapped machine, extended behaviour builds on the wrapped machine.
#[test]
fn test_decorator_delegates_overrides_and_extends() {
    let normal_machine = NormalCoffeeMachine;
    let enhanced_machine = EnhancedCoffeeMachine::new(normal_machine);

    // non-overridden behaviour
    assert_eq!(
        enhanced_machine.make_small_coffee(),
        normal_machine.make_small_coffee()
    );
    // overridden behaviour
    assert_ne!(
        enhanced_machine.make_large_coffee(),
        normal_machine.make_large_coffee()
    );
    assert_eq!(
        enhanced_machine.make_large_coffee(),
        "Enhanced: Making large coffee"
    );
    // extended behaviour
    assert_eq!(
        enhanced_machine.make_coffee_with_milk(),
        vec![
            "Enhanced: Making coffee with milk",
            "Normal: Making small coffee",
            "Enhanced: Adding milk",
        ]
    );
}

/// Decorator with a mocked inner machine: only the small coffee ever reaches it.
/// The large coffee is fully handled by the decorator.
#[test]
fn test_decorator_never_forwards_large_coffee() {
    let mock = MockCoffeeMachine::new();
    mock.expect_small_coffee().return_line("mock small");
    mock.expect_small_coffee().return_line("mock small again");

    let enhanced = EnhancedCoffeeMachine::new(mock);
    assert_eq!(enhanced.make_small_coffee(), "mock small");
    assert_eq!(enhanced.make_large_coffee(), "Enhanced: Making large coffee");
    assert_eq!(enhanced.make_coffee_with_milk()[1], "mock small again");

    enhanced.inner().verify();
}

/// Facade: a saved user comes back out of `find_first`.
#[test]
fn test_facade_round_trips_user() {
    let mut user_repository = UserRepository::new();
    let user = User::new("dbacinski");

    user_repository.save(&user).unwrap();
    let result_user = user_repository.find_first();

    assert_eq!(result_user, user);
}

/// Protection Proxy: denied without the password, delegated with it.
#[test]
fn test_protection_proxy_gates_reads() {
    let mut secured_file = SecuredFile::new(NormalFile);

    assert_eq!(secured_file.read("readme.md"), Err(FileError::AccessDenied));

    secured_file.set_password("secret");
    assert_eq!(
        secured_file.read("readme.md").unwrap(),
        "Reading file: readme.md"
    );
}

/// Protection Proxy with a mocked file: a denied read never reaches the file,
/// and errors from the file pass through untouched once unlocked.
#[test]
fn test_protection_proxy_shields_wrapped_file() {
    let mut secured_file = SecuredFile::new(MockFile::new());

    // No expectations yet: any delegated read would panic.
    assert_eq!(secured_file.read("readme.md"), Err(FileError::AccessDenied));
    secured_file.set_password("wrong");
    assert_eq!(secured_file.read("readme.md"), Err(FileError::AccessDenied));

    secured_file
        .inner()
        .expect_read("readme.md")
        .return_err(FileError::Unreadable("locked by another process".into()));
    secured_file.set_password("secret");
    assert_eq!(
        secured_file.read("readme.md"),
        Err(FileError::Unreadable("locked by another process".into()))
    );

    secured_file.inner().verify();
}
