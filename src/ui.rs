/// Static page shell. The script pages through days via the JSON routes and
/// builds the game list from the returned cards.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Top Match NBA</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .pager {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    #date {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button:disabled {
      opacity: 0.35;
      cursor: default;
    }

    #games-container {
      display: grid;
      gap: 12px;
    }

    .game {
      display: grid;
      grid-template-columns: 1fr auto 1fr auto;
      align-items: center;
      gap: 12px;
      background: white;
      border-radius: 18px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .team {
      display: flex;
      align-items: center;
      gap: 10px;
      font-weight: 600;
    }

    .team img {
      width: 40px;
      height: 40px;
      object-fit: contain;
    }

    .score {
      min-width: 56px;
      text-align: center;
      border-radius: 999px;
      padding: 6px 12px;
      font-weight: 600;
      background: #ddd;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Top Match NBA</h1>

    <section class="pager">
      <button id="prev-btn" type="button">&larr; Previous day</button>
      <span id="date"></span>
      <button id="next-btn" type="button" disabled>Next day &rarr;</button>
    </section>

    <div id="status" class="status"></div>
    <button id="retry-btn" type="button" hidden>Try again</button>
    <section id="games-container"></section>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const prevBtn = document.getElementById('prev-btn');
    const nextBtn = document.getElementById('next-btn');
    const statusEl = document.getElementById('status');
    const container = document.getElementById('games-container');
    const retryBtn = document.getElementById('retry-btn');
    let latestSeq = -1;
    let latestShownSeq = -1;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const team = (name, logo) => {
      const el = document.createElement('span');
      el.className = 'team';
      const img = document.createElement('img');
      img.src = logo;
      img.alt = '';
      const label = document.createElement('span');
      label.textContent = name;
      el.append(img, label);
      return el;
    };

    const renderGames = (games) => {
      container.replaceChildren();
      games.forEach((game) => {
        const row = document.createElement('div');
        row.className = 'game';
        const vs = document.createElement('span');
        vs.textContent = 'vs';
        const score = document.createElement('span');
        score.className = 'score';
        score.textContent = game.punctuation === null ? '?' : game.punctuation;
        if (game.color) {
          score.style.background = game.color;
        }
        row.append(team(game.home_team, game.home_logo), vs, team(game.visitor_team, game.visitor_logo), score);
        container.appendChild(row);
      });
    };

    const updateUI = (view) => {
      if (view.seq < latestSeq) {
        return;
      }
      latestSeq = view.seq;
      dateEl.textContent = view.date;
      nextBtn.disabled = !view.can_step_forward;
      const shownSeq = view.shown_seq === null ? -1 : view.shown_seq;
      if (shownSeq >= latestShownSeq) {
        latestShownSeq = shownSeq;
        renderGames(view.games);
      }
      retryBtn.hidden = !view.error;
      if (view.error) {
        setStatus(view.error, 'error');
      } else if (!view.games.length) {
        setStatus('No games this day.', '');
      } else {
        setStatus('', '');
      }
    };

    const send = async (method, path) => {
      const res = await fetch(path, { method });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      updateUI(await res.json());
    };

    prevBtn.addEventListener('click', () => {
      send('POST', '/api/day/previous').catch((err) => setStatus(err.message, 'error'));
    });

    nextBtn.addEventListener('click', () => {
      send('POST', '/api/day/next').catch((err) => setStatus(err.message, 'error'));
    });

    retryBtn.addEventListener('click', () => {
      send('POST', '/api/day/reload').catch((err) => setStatus(err.message, 'error'));
    });

    send('GET', '/api/day').catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
