//! Complete quest documents that analyze without diagnostics.

/// Quest in the official dialect.
pub const OFFICIAL_QUEST: &str = r#"main
{
    questname "Pig Farmer"
    version 1
}

state Begin
{
    desc "Talk to the farmer"
    action AddNpcText(1, "Could you help me?");
    rule TalkedToNpc(1) goto Reward;
}

state Reward
{
    desc "Collect the reward"
    action GiveItem(1, 100);
    action ShowHint("Thanks!");
    rule Always() goto Finish;
}

state Finish
{
    action End();
}
"#;

/// Quest in the EOSERV dialect, conditionals included.
pub const EOSERV_QUEST: &str = r#"main
{
    questname "Guard Duty"
    version 2
    hidden
}

// guard at the gate
state Begin
{
    desc "Talk to the guard"
    action AddNpcText(1, "Halt!");
    rule TalkedToNpc(1) goto Patrol
}

state Patrol
{
    desc "Walk the walls"
    if IsGender(0) ShowHint("Good luck, sir.");
    else ShowHint("Good luck, madam.");
    rule EnterCoord(5, 10, 10) goto Patrol
    rule Always() goto Finish
}

state Finish
{
    action GiveExp(500);
    action End();
}
"#;
