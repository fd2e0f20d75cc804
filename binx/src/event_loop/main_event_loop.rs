// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use binx_redux::{ActionDispatcher, ActionReceiver, Continuation, DISPATCHER_CAPACITY,
                 Store, create_dispatcher};

use crate::{Action, AppReducer, AppState, ByteBuffer, CommonResult, InputDevice, Screen,
            ok, render, translate, viewport_height_for_rows};

/// Run one viewing session, from taking over the terminal until the user presses
/// `Escape` in normal mode (or the input stream ends). The terminal is always given
/// back, even if something fails along the way.
///
/// There are two tasks:
/// 1. The input task reads events from `input_device`, translates them into actions, and
///    sends them down the dispatcher channel. It waits (backpressure) when the channel
///    is full.
/// 2. This task drains the channel. For each action it runs the reducer, then renders
///    the new state. Both hold the one lock on the state for exactly one pass.
///
/// Returns the final state.
///
/// # Errors
///
/// Returns an error if the terminal can't be set up or painted.
pub async fn run_main_event_loop(
    viewport_width: u16,
    buffer: ByteBuffer,
    input_device: InputDevice,
    screen: &mut impl Screen,
) -> CommonResult<AppState> {
    let result = match screen.enter() {
        Ok(()) => main_event_loop_impl(viewport_width, buffer, input_device, screen).await,
        Err(err) => Err(err),
    };

    let exit_result = screen.exit();

    let state = result?;
    exit_result?;
    ok!(state)
}

async fn main_event_loop_impl(
    viewport_width: u16,
    buffer: ByteBuffer,
    input_device: InputDevice,
    screen: &mut impl Screen,
) -> CommonResult<AppState> {
    let initial_size = screen.size()?;
    let state = AppState::new(viewport_width, viewport_height_for_rows(initial_size.rows));
    let store = Store::new(state, AppReducer::new(buffer.clone()));

    let (dispatcher, mut receiver) = create_dispatcher::<Action>(DISPATCHER_CAPACITY);
    let input_task = tokio::spawn(run_input_task(input_device, dispatcher));

    tracing::info!(
        ?initial_size,
        viewport_width,
        buffer_len = buffer.len(),
        "main_event_loop -> Startup 🚀"
    );

    let result = reduce_and_render_until_exit(&store, &buffer, &mut receiver, screen).await;

    input_task.abort();
    receiver.close();

    tracing::info!("main_event_loop -> Shutdown 🛑");

    result?;
    ok!(store.get_state().await)
}

async fn reduce_and_render_until_exit(
    store: &Store<AppState, Action>,
    buffer: &ByteBuffer,
    receiver: &mut ActionReceiver<Action>,
    screen: &mut impl Screen,
) -> CommonResult<()> {
    render_frame(store, buffer, screen).await?;

    while let Some(action) = receiver.recv().await {
        let is_resize = matches!(action, Action::Resize { .. });

        if store.dispatch_action(action).await == Continuation::Exit {
            return ok!();
        }

        // The old frame may be laid out for a different size.
        if is_resize {
            screen.clear()?;
        }

        render_frame(store, buffer, screen).await?;
    }

    tracing::info!("main_event_loop -> input closed, ending session");
    ok!()
}

/// Lock the state for one render pass.
async fn render_frame(
    store: &Store<AppState, Action>,
    buffer: &ByteBuffer,
    screen: &mut impl Screen,
) -> CommonResult<()> {
    let shared_state = store.get_shared_state();
    let state = shared_state.lock().await;
    render(&state, buffer, screen)
}

async fn run_input_task(mut input_device: InputDevice, dispatcher: ActionDispatcher<Action>) {
    loop {
        let event = match input_device.next_event().await {
            Ok(it) => it,
            Err(err) => {
                tracing::warn!(%err, "input task -> no more events");
                break;
            }
        };

        let action = translate(event);
        if let Err(err) = dispatcher.dispatch(action).await {
            tracing::info!(%err, "input task -> dispatcher closed");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::{BYTE_GLYPH, InputMode, OffscreenScreen, Size, assert_eq2};

    fn key(code: KeyCode) -> std::io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn chars(text: &str) -> Vec<std::io::Result<Event>> {
        text.chars().map(|ch| key(KeyCode::Char(ch))).collect()
    }

    fn bytes() -> ByteBuffer { ByteBuffer::from((0..=255).cycle().take(4_096).collect::<Vec<u8>>()) }

    #[tokio::test]
    async fn test_escape_ends_session_and_restores_terminal() {
        let mut events = vec![key(KeyCode::Down), key(KeyCode::Down), key(KeyCode::Esc)];
        // Never reduced, the session ends first.
        events.push(key(KeyCode::Down));

        let mut screen = OffscreenScreen::new(Size { cols: 80, rows: 24 });
        let state = run_main_event_loop(80, bytes(), InputDevice::new_mock(events), &mut screen)
            .await
            .unwrap();

        assert_eq2!(state.start_byte, 160);
        assert_eq2!(state.viewport_height, 22);
        assert_eq2!(state.last_action, "Escape");
        assert!(!screen.is_entered);
        assert_eq2!(screen.exit_count, 1);
    }

    #[tokio::test]
    async fn test_seek_then_search() {
        let mut events = vec![key(KeyCode::Char('s'))];
        events.extend(chars("0x100"));
        events.push(key(KeyCode::Enter));
        events.push(key(KeyCode::Char('f')));
        events.extend(chars("0a0b"));
        events.push(key(KeyCode::Enter));

        let mut screen = OffscreenScreen::new(Size { cols: 16, rows: 6 });
        let state = run_main_event_loop(16, bytes(), InputDevice::new_mock(events), &mut screen)
            .await
            .unwrap();

        assert_eq2!(state.mode, InputMode::Normal);
        assert_eq2!(state.start_byte, 256);
        assert_eq2!(state.highlight_pos, Some(10));
        assert_eq2!(state.highlight_len, 2);
        assert_eq2!(state.status, "found at 10");
    }

    #[tokio::test]
    async fn test_renders_last_frame() {
        let events = vec![key(KeyCode::Char('s')), key(KeyCode::Char('4'))];
        let mut screen = OffscreenScreen::new(Size { cols: 60, rows: 4 });
        run_main_event_loop(8, bytes(), InputDevice::new_mock(events), &mut screen)
            .await
            .unwrap();

        // Startup render + one per action.
        assert_eq2!(screen.flush_count, 3);
        assert_eq2!(screen.line_text(0), BYTE_GLYPH.to_string().repeat(8));
        assert_eq2!(
            screen.line_text(2),
            "--0--16--SeekInput--Last Action: OtherKey--Status:"
        );
        assert_eq2!(screen.line_text(3), "Seek to offset: 4");
    }

    #[tokio::test]
    async fn test_resize_clears_and_changes_height() {
        let events = vec![Ok(Event::Resize(8, 10))];
        let mut screen = OffscreenScreen::new(Size { cols: 8, rows: 4 });
        let state = run_main_event_loop(8, bytes(), InputDevice::new_mock(events), &mut screen)
            .await
            .unwrap();

        assert_eq2!(state.viewport_height, 8);
        assert_eq2!(screen.clear_count, 1);
    }

    #[tokio::test]
    async fn test_input_error_ends_session() {
        let events = vec![key(KeyCode::Down), Err(std::io::Error::other("tty gone"))];
        let mut screen = OffscreenScreen::new(Size { cols: 8, rows: 4 });
        let state = run_main_event_loop(8, bytes(), InputDevice::new_mock(events), &mut screen)
            .await
            .unwrap();
        assert_eq2!(state.start_byte, 8);
        assert_eq2!(screen.exit_count, 1);
    }
}
