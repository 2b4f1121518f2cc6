pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Life Balance Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f2f6ef;
      --bg-2: #d6e8cf;
      --ink: #25302a;
      --positive: #2d7a4b;
      --positive-soft: #e2f2e7;
      --negative: #c63b2b;
      --negative-soft: #fbe7e2;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #eef5e8 60%, #f4f7f0 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: #5c665f;
      font-size: 1rem;
    }

    .month-bar {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 12px;
    }

    .month-label {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.4rem;
      font-weight: 600;
      min-width: 7ch;
      text-align: center;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent);
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--positive);
      color: white;
      box-shadow: 0 10px 24px rgba(45, 122, 75, 0.3);
    }

    .btn-danger {
      background: var(--negative);
      color: white;
      box-shadow: 0 10px 24px rgba(198, 59, 43, 0.25);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #81897f;
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .stat .value.positive {
      color: var(--positive);
    }

    .stat .value.negative {
      color: var(--negative);
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      justify-self: start;
    }

    .tab {
      background: transparent;
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      color: #6b7268;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      margin-bottom: 16px;
    }

    .weekdays,
    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .weekdays div {
      text-align: center;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #81897f;
      padding-bottom: 6px;
    }

    .day {
      min-height: 76px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      padding: 6px;
      cursor: pointer;
      display: flex;
      flex-direction: column;
      gap: 3px;
      overflow: hidden;
    }

    .day.empty {
      border: none;
      cursor: default;
    }

    .day.today {
      border-color: var(--accent);
    }

    .day.selected {
      background: var(--positive-soft);
    }

    .day-number {
      font-size: 0.85rem;
      font-weight: 600;
    }

    .chip {
      display: inline-block;
      border-radius: 6px;
      padding: 1px 6px;
      font-size: 0.7rem;
      white-space: nowrap;
      overflow: hidden;
      text-overflow: ellipsis;
      max-width: 100%;
    }

    .chip.positive {
      background: var(--positive-soft);
      color: var(--positive);
    }

    .chip.negative {
      background: var(--negative-soft);
      color: var(--negative);
    }

    .day-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 12px;
    }

    .day-header h2 {
      margin: 0;
    }

    .entry {
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 12px;
      margin-bottom: 10px;
      display: grid;
      gap: 8px;
    }

    .entry-chips {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .entry .memo {
      margin: 0;
      font-size: 0.9rem;
      color: #5c665f;
    }

    .entry-actions {
      display: flex;
      gap: 8px;
    }

    form {
      display: grid;
      gap: 14px;
      border-top: 1px dashed rgba(47, 72, 88, 0.15);
      padding-top: 14px;
    }

    form label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      font-weight: 600;
    }

    form input[type="date"],
    form textarea {
      font: inherit;
      font-weight: 400;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 10px;
      padding: 8px 10px;
    }

    .choices {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
    }

    .choices h3 {
      margin: 0 0 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #81897f;
    }

    .choice {
      display: flex;
      align-items: center;
      gap: 8px;
      font-weight: 400;
      padding: 2px 0;
    }

    .form-actions {
      display: flex;
      gap: 8px;
    }

    #bar-chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    #bar-chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a8278;
      font-size: 11px;
    }

    .bar.positive {
      fill: var(--positive);
      opacity: 0.75;
    }

    .bar.negative {
      fill: var(--negative);
      opacity: 0.75;
    }

    .breakdown-header,
    .table-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      margin-bottom: 12px;
    }

    .breakdown-header h2,
    .table-header h2 {
      margin: 0;
    }

    .breakdown-header select {
      font: inherit;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 10px;
      padding: 6px 10px;
    }

    .breakdown-row {
      display: grid;
      grid-template-columns: minmax(110px, 1fr) 3fr auto;
      align-items: center;
      gap: 10px;
      padding: 4px 0;
      font-size: 0.9rem;
    }

    .breakdown-track {
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      height: 10px;
      overflow: hidden;
    }

    .breakdown-fill {
      height: 100%;
      border-radius: 999px;
    }

    .breakdown-fill.positive {
      background: var(--positive);
    }

    .breakdown-fill.negative {
      background: var(--negative);
    }

    .breakdown-count {
      font-weight: 600;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th,
    td {
      text-align: left;
      padding: 8px 10px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #81897f;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7268;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f766c;
      font-size: 0.9rem;
    }

    .hidden {
      display: none;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 640px) {
      .app {
        padding: 26px 20px;
      }
      .day {
        min-height: 56px;
      }
      .chip {
        display: none;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Life Balance Tracker</h1>
      <p class="subtitle">Log the good and the bad against your own categories, day by day.</p>
    </header>

    <section class="month-bar">
      <button id="prev-month" type="button">&larr; Prev</button>
      <div class="month-label" id="month-label">&nbsp;</div>
      <button id="today-month" type="button">Today</button>
      <button id="next-month" type="button">Next &rarr;</button>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Positive</span>
        <span id="total-positive" class="value positive">0</span>
      </div>
      <div class="stat">
        <span class="label">Negative</span>
        <span id="total-negative" class="value negative">0</span>
      </div>
      <div class="stat">
        <span class="label">Days logged</span>
        <span id="total-days" class="value">0</span>
      </div>
    </section>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="calendar" role="tab" aria-selected="true">Calendar</button>
      <button class="tab" type="button" data-tab="report" role="tab" aria-selected="false">Report</button>
    </div>

    <section id="calendar-view">
      <div class="card">
        <div class="weekdays">
          <div>Sun</div><div>Mon</div><div>Tue</div><div>Wed</div><div>Thu</div><div>Fri</div><div>Sat</div>
        </div>
        <div class="grid" id="calendar-grid"></div>
      </div>

      <div class="card">
        <div class="day-header">
          <h2 id="day-title">&nbsp;</h2>
          <button id="add-entry" class="btn-primary" type="button">Add entry</button>
        </div>
        <div id="day-entries"></div>
        <form id="entry-form" class="hidden">
          <label>Date
            <input type="date" id="form-date" required />
          </label>
          <div class="choices">
            <div>
              <h3>Positive</h3>
              <div id="positive-choices"></div>
            </div>
            <div>
              <h3>Negative</h3>
              <div id="negative-choices"></div>
            </div>
          </div>
          <label>Memo
            <textarea id="form-memo" rows="3" maxlength="1000" placeholder="Optional note"></textarea>
          </label>
          <div class="form-actions">
            <button type="submit" class="btn-primary" id="form-save">Save</button>
            <button type="button" id="form-cancel">Cancel</button>
          </div>
        </form>
      </div>
    </section>

    <section id="report-view" class="hidden">
      <div class="card">
        <h2>Daily totals</h2>
        <svg id="bar-chart" viewBox="0 0 600 260" aria-label="Daily totals chart" role="img"></svg>
      </div>
      <div class="card">
        <div class="breakdown-header">
          <h2>Category breakdown</h2>
          <select id="breakdown-kind">
            <option value="positive">Positive</option>
            <option value="negative">Negative</option>
          </select>
        </div>
        <div id="breakdown"></div>
      </div>
      <div class="card">
        <div class="table-header">
          <h2>Entries</h2>
          <button id="delete-selected" class="btn-danger" type="button">Delete selected</button>
        </div>
        <table>
          <thead>
            <tr><th></th><th>Date</th><th>Positive</th><th>Negative</th><th>Memo</th></tr>
          </thead>
          <tbody id="entries-body"></tbody>
        </table>
      </div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Entries live in a single data file on the server. Categories can be changed by editing that file.</p>
  </main>

  <script>
    const TODAY = '{{DATE}}';
    let month = TODAY.slice(0, 7);
    let selectedDay = TODAY;
    let categories = [];
    let report = null;
    let monthLogs = [];
    let editingId = null;

    const byId = (id) => document.getElementById(id);
    const statusEl = byId('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flashStatus = (message) => {
      setStatus(message, 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const jsonOptions = (method, payload) => ({
      method,
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(payload)
    });

    const chip = (text, className) => {
      const el = document.createElement('span');
      el.className = className;
      el.textContent = text;
      return el;
    };

    const loadCategories = async () => {
      const data = await api('/api/categories');
      categories = data.data;
    };

    const loadMonth = async () => {
      report = await api(`/api/report?month=${month}`);
      monthLogs = await api(`/api/logs?month=${month}`);
      byId('month-label').textContent = month;
      renderSummary();
      renderCalendar();
      renderReport();
    };

    const loadDay = async () => {
      const day = await api(`/api/day?date=${selectedDay}`);
      renderDayPanel(day);
    };

    const refresh = async () => {
      await loadMonth();
      await loadDay();
    };

    const renderSummary = () => {
      byId('total-positive').textContent = report.summary.total_positive;
      byId('total-negative').textContent = report.summary.total_negative;
      byId('total-days').textContent = report.summary.total_days;
    };

    const renderCalendar = () => {
      const grid = byId('calendar-grid');
      grid.innerHTML = '';
      const [year, monthNum] = month.split('-').map(Number);
      const firstWeekday = new Date(year, monthNum - 1, 1).getDay();
      const daysInMonth = new Date(year, monthNum, 0).getDate();

      const eventsByDate = {};
      report.events.forEach((event) => {
        const bucket = eventsByDate[event.date] || (eventsByDate[event.date] = { positive: [], negative: [] });
        bucket.positive.push(...event.positive);
        bucket.negative.push(...event.negative);
      });

      for (let i = 0; i < firstWeekday; i += 1) {
        const filler = document.createElement('div');
        filler.className = 'day empty';
        grid.appendChild(filler);
      }

      for (let dayNum = 1; dayNum <= daysInMonth; dayNum += 1) {
        const date = `${month}-${String(dayNum).padStart(2, '0')}`;
        const cell = document.createElement('div');
        cell.className = 'day';
        if (date === TODAY) {
          cell.classList.add('today');
        }
        if (date === selectedDay) {
          cell.classList.add('selected');
        }

        const number = document.createElement('span');
        number.className = 'day-number';
        number.textContent = dayNum;
        cell.appendChild(number);

        const bucket = eventsByDate[date];
        if (bucket) {
          bucket.positive.forEach((name) => cell.appendChild(chip(name, 'chip positive')));
          bucket.negative.forEach((name) => cell.appendChild(chip(name, 'chip negative')));
        }

        cell.addEventListener('click', () => {
          selectedDay = date;
          renderCalendar();
          loadDay().catch((err) => setStatus(err.message, 'error'));
        });
        grid.appendChild(cell);
      }
    };

    const renderDayPanel = (day) => {
      byId('day-title').textContent = selectedDay;
      const container = byId('day-entries');
      container.innerHTML = '';

      if (!day.logs.length) {
        const empty = document.createElement('p');
        empty.className = 'hint';
        empty.textContent = 'Nothing logged for this day yet.';
        container.appendChild(empty);
      }

      day.logs.forEach((log, idx) => {
        const event = day.events[idx];
        const row = document.createElement('div');
        row.className = 'entry';

        const chips = document.createElement('div');
        chips.className = 'entry-chips';
        event.positive.forEach((name) => chips.appendChild(chip(name, 'chip positive')));
        event.negative.forEach((name) => chips.appendChild(chip(name, 'chip negative')));
        row.appendChild(chips);

        if (log.memo) {
          const memo = document.createElement('p');
          memo.className = 'memo';
          memo.textContent = log.memo;
          row.appendChild(memo);
        }

        const actions = document.createElement('div');
        actions.className = 'entry-actions';
        const edit = document.createElement('button');
        edit.type = 'button';
        edit.textContent = 'Edit';
        edit.addEventListener('click', () => openForm(log));
        const del = document.createElement('button');
        del.type = 'button';
        del.className = 'btn-danger';
        del.textContent = 'Delete';
        del.addEventListener('click', () => {
          removeEntry(log.id).catch((err) => setStatus(err.message, 'error'));
        });
        actions.appendChild(edit);
        actions.appendChild(del);
        row.appendChild(actions);

        container.appendChild(row);
      });
    };

    const renderChoices = (checkedIds) => {
      const targets = { positive: byId('positive-choices'), negative: byId('negative-choices') };
      targets.positive.innerHTML = '';
      targets.negative.innerHTML = '';
      categories.forEach((category) => {
        const label = document.createElement('label');
        label.className = 'choice';
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.value = category.id;
        box.checked = checkedIds.includes(category.id);
        label.appendChild(box);
        label.appendChild(document.createTextNode(category.name));
        targets[category.kind].appendChild(label);
      });
    };

    const openForm = (log) => {
      editingId = log ? log.id : null;
      byId('form-date').value = log ? log.date : selectedDay;
      byId('form-memo').value = (log && log.memo) || '';
      renderChoices(log ? log.category_ids : []);
      byId('form-save').textContent = editingId ? 'Update' : 'Save';
      byId('entry-form').classList.remove('hidden');
    };

    const closeForm = () => {
      editingId = null;
      byId('entry-form').classList.add('hidden');
    };

    const submitForm = async () => {
      const ids = Array.from(document.querySelectorAll('.choice input:checked'))
        .map((box) => Number(box.value));
      const payload = {
        date: byId('form-date').value,
        category_ids: ids,
        memo: byId('form-memo').value || null
      };

      setStatus('Saving...', 'info');
      if (editingId) {
        await api(`/api/logs/${editingId}`, jsonOptions('PUT', payload));
      } else {
        await api('/api/logs', jsonOptions('POST', payload));
      }
      closeForm();
      await refresh();
      flashStatus('Saved');
    };

    const removeEntry = async (id) => {
      setStatus('Deleting...', 'info');
      await api(`/api/logs/${id}`, { method: 'DELETE' });
      await refresh();
      flashStatus('Deleted');
    };

    const deleteSelected = async () => {
      const ids = Array.from(document.querySelectorAll('.row-select:checked'))
        .map((box) => box.value);
      if (!ids.length) {
        setStatus('Nothing selected', 'error');
        return;
      }
      setStatus('Deleting...', 'info');
      await api('/api/logs/delete', jsonOptions('POST', { ids }));
      await refresh();
      flashStatus('Deleted');
    };

    const renderReport = () => {
      renderBarChart();
      renderBreakdown();
      renderTable();
    };

    const renderBarChart = () => {
      const chart = byId('bar-chart');
      const byDate = {};
      report.summary.daily.forEach((day) => {
        const bucket = byDate[day.date] || (byDate[day.date] = { positive: 0, negative: 0 });
        bucket.positive += day.positive;
        bucket.negative += day.negative;
      });
      const dates = Object.keys(byDate).sort();

      if (!dates.length) {
        chart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data for this month</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 36;
      const paddingY = 30;
      const top = 16;
      const max = Math.max(1, ...dates.map((date) => Math.max(byDate[date].positive, byDate[date].negative)));
      const slot = (width - paddingX * 2) / dates.length;
      const barWidth = Math.min(14, slot / 2.5);
      const scaleY = (height - top - paddingY) / max;

      let marks = '';
      const ticks = Math.min(4, max);
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = height - paddingY - value * scaleY;
        marks += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        marks += `<text class="chart-label" x="${paddingX - 8}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const labelEvery = Math.ceil(dates.length / 10);
      dates.forEach((date, idx) => {
        const center = paddingX + slot * idx + slot / 2;
        const bucket = byDate[date];
        const posHeight = bucket.positive * scaleY;
        const negHeight = bucket.negative * scaleY;
        marks += `<rect class="bar positive" x="${center - barWidth - 1}" y="${height - paddingY - posHeight}" width="${barWidth}" height="${posHeight}" />`;
        marks += `<rect class="bar negative" x="${center + 1}" y="${height - paddingY - negHeight}" width="${barWidth}" height="${negHeight}" />`;
        if (idx % labelEvery === 0) {
          marks += `<text class="chart-label" x="${center}" y="${height - paddingY + 16}" text-anchor="middle">${date.slice(8)}</text>`;
        }
      });

      chart.innerHTML = marks;
    };

    const renderBreakdown = () => {
      const kind = byId('breakdown-kind').value;
      const names = report.events.flatMap((event) => event[kind]);
      const counts = {};
      names.forEach((name) => {
        counts[name] = (counts[name] || 0) + 1;
      });
      const rows = Object.entries(counts).sort((a, b) => b[1] - a[1]);

      const container = byId('breakdown');
      container.innerHTML = '';
      if (!rows.length) {
        const empty = document.createElement('p');
        empty.className = 'hint';
        empty.textContent = 'No data for this month';
        container.appendChild(empty);
        return;
      }

      const maxCount = rows[0][1];
      rows.forEach(([name, count]) => {
        const row = document.createElement('div');
        row.className = 'breakdown-row';
        const label = document.createElement('span');
        label.className = 'breakdown-name';
        label.textContent = name;
        const track = document.createElement('div');
        track.className = 'breakdown-track';
        const fill = document.createElement('div');
        fill.className = `breakdown-fill ${kind}`;
        fill.style.width = `${(count / maxCount) * 100}%`;
        track.appendChild(fill);
        const value = document.createElement('span');
        value.className = 'breakdown-count';
        value.textContent = count;
        row.appendChild(label);
        row.appendChild(track);
        row.appendChild(value);
        container.appendChild(row);
      });
    };

    const renderTable = () => {
      const body = byId('entries-body');
      body.innerHTML = '';
      monthLogs.forEach((log, idx) => {
        const event = report.events[idx] || { positive: [], negative: [] };
        const row = document.createElement('tr');

        const selectCell = document.createElement('td');
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.className = 'row-select';
        box.value = log.id;
        selectCell.appendChild(box);
        row.appendChild(selectCell);

        [log.date, event.positive.join(', '), event.negative.join(', '), log.memo || ''].forEach((text) => {
          const cell = document.createElement('td');
          cell.textContent = text;
          row.appendChild(cell);
        });

        body.appendChild(row);
      });
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      byId('calendar-view').classList.toggle('hidden', tab !== 'calendar');
      byId('report-view').classList.toggle('hidden', tab !== 'report');
    };

    const shiftMonth = (delta) => {
      const [year, monthNum] = month.split('-').map(Number);
      const next = new Date(year, monthNum - 1 + delta, 1);
      month = `${next.getFullYear()}-${String(next.getMonth() + 1).padStart(2, '0')}`;
      selectedDay = month === TODAY.slice(0, 7) ? TODAY : `${month}-01`;
      closeForm();
      refresh().catch((err) => setStatus(err.message, 'error'));
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });
    byId('prev-month').addEventListener('click', () => shiftMonth(-1));
    byId('next-month').addEventListener('click', () => shiftMonth(1));
    byId('today-month').addEventListener('click', () => {
      month = TODAY.slice(0, 7);
      selectedDay = TODAY;
      closeForm();
      refresh().catch((err) => setStatus(err.message, 'error'));
    });
    byId('add-entry').addEventListener('click', () => openForm(null));
    byId('form-cancel').addEventListener('click', closeForm);
    byId('entry-form').addEventListener('submit', (event) => {
      event.preventDefault();
      submitForm().catch((err) => setStatus(err.message, 'error'));
    });
    byId('breakdown-kind').addEventListener('change', renderBreakdown);
    byId('delete-selected').addEventListener('click', () => {
      deleteSelected().catch((err) => setStatus(err.message, 'error'));
    });

    const init = async () => {
      await loadCategories();
      await refresh();
    };
    init().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
