use crate::models::DateRange;

pub fn render_index(bounds: DateRange) -> String {
    INDEX_HTML
        .replace("{{MIN_DATE}}", &bounds.start.to_string())
        .replace("{{MAX_DATE}}", &bounds.end.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Bike Sharing Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6f6;
      --bg-2: #bfe3e0;
      --ink: #22302f;
      --accent: #5f9ea0;
      --accent-soft: #7fffd4;
      --accent-2: #2f4858;
      --line: #90caf9;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top left, var(--bg-2), transparent 55%),
        linear-gradient(135deg, var(--bg-1), #e3f2f1 60%, #f6fbfb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      grid-template-columns: 260px 1fr;
      gap: 24px;
      padding: 28px 22px 40px;
    }

    aside {
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
      align-content: start;
      position: sticky;
      top: 28px;
      height: fit-content;
    }

    aside h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    aside label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #6b7c7b;
    }

    aside input[type="date"] {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      background: white;
      color: var(--ink);
    }

    .reset {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(95, 158, 160, 0.3);
    }

    .caption {
      margin: 0;
      font-size: 0.8rem;
      color: #7a8b8a;
    }

    .app {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
      align-content: start;
      animation: rise 600ms ease;
      min-width: 0;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 3.6vw, 2.6rem);
      margin: 0;
    }

    h3 {
      margin: 0;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: #5d6b6a;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 22px;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font: inherit;
      font-size: 0.9rem;
      font-weight: 600;
      color: #5d6b6a;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .tab-panel {
      display: none;
      gap: 18px;
    }

    .tab-panel.active {
      display: grid;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
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
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7f8e8d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .chart-card h4 {
      margin: 0;
      font-size: 0.95rem;
      color: #4f5e5d;
    }

    .chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    .chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke-width: 2.5;
    }

    .chart-point {
      fill: white;
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #6f7d7c;
      font-size: 11px;
    }

    .chart-value {
      fill: var(--accent-2);
      font-size: 11px;
      font-weight: 600;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      font-size: 0.85rem;
      color: #4f5e5d;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
      background: var(--swatch);
    }

    .prose {
      margin: 0;
      line-height: 1.6;
      color: #3c4a49;
    }

    ol.prose {
      padding-left: 22px;
    }

    .status {
      font-size: 0.95rem;
      color: #5d6b6a;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
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

    @media (max-width: 860px) {
      body {
        grid-template-columns: 1fr;
      }
      aside {
        position: static;
      }
      .app {
        padding: 24px 18px;
      }
    }
  </style>
</head>
<body>
  <aside>
    <h2>Date range</h2>
    <label>
      Start
      <input id="start" type="date" min="{{MIN_DATE}}" max="{{MAX_DATE}}" value="{{MIN_DATE}}" />
    </label>
    <label>
      End
      <input id="end" type="date" min="{{MIN_DATE}}" max="{{MAX_DATE}}" value="{{MAX_DATE}}" />
    </label>
    <button class="reset" id="reset" type="button">Full range</button>
    <p class="caption">Data available from {{MIN_DATE}} to {{MAX_DATE}}.</p>
  </aside>

  <main class="app">
    <header>
      <h1>Bike Sharing Analysis</h1>
      <p class="subtitle" id="range-label">Rentals by day, rider type, hour, season and weather.</p>
    </header>

    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="about" role="tab" aria-selected="true">About</button>
      <button class="tab" type="button" data-tab="overview" role="tab" aria-selected="false">Overview</button>
      <button class="tab" type="button" data-tab="riders" role="tab" aria-selected="false">Riders</button>
      <button class="tab" type="button" data-tab="workingday" role="tab" aria-selected="false">Working days</button>
      <button class="tab" type="button" data-tab="hours" role="tab" aria-selected="false">Hours</button>
      <button class="tab" type="button" data-tab="seasons" role="tab" aria-selected="false">Seasons</button>
      <button class="tab" type="button" data-tab="weather" role="tab" aria-selected="false">Weather</button>
      <button class="tab" type="button" data-tab="conclusion" role="tab" aria-selected="false">Conclusion</button>
    </nav>

    <section class="tab-panel active" data-panel="about">
      <h3>About this dataset</h3>
      <p class="prose">
        The bike sharing dataset holds hourly and daily counts of rented bikes between 2011 and 2012
        in the Capital Bikeshare system, together with the season, weather and working-day status of
        each period. Every count is split into casual riders and registered members.
      </p>
      <h3>Questions</h3>
      <ol class="prose">
        <li>How do casual riders compare with registered members?</li>
        <li>How does usage differ between working days and days off?</li>
        <li>At which hours is usage highest and lowest?</li>
        <li>How does usage compare across the four seasons?</li>
        <li>How does usage compare across weather conditions?</li>
      </ol>
    </section>

    <section class="tab-panel" data-panel="overview">
      <h3>Daily users</h3>
      <div class="panel">
        <div class="stat">
          <span class="label">Registered users</span>
          <span class="value" id="metric-registered">--</span>
        </div>
        <div class="stat">
          <span class="label">Casual users</span>
          <span class="value" id="metric-casual">--</span>
        </div>
        <div class="stat">
          <span class="label">Total users</span>
          <span class="value" id="metric-total">--</span>
        </div>
      </div>
      <div class="chart-card">
        <svg class="chart" id="chart-daily" viewBox="0 0 720 280" role="img" aria-label="Daily totals"></svg>
      </div>
    </section>

    <section class="tab-panel" data-panel="riders">
      <h3>Casual riders versus registered members</h3>
      <div class="chart-card">
        <svg class="chart" id="chart-split" viewBox="0 0 720 280" role="img" aria-label="Rider split"></svg>
        <div class="legend" id="legend-split"></div>
      </div>
    </section>

    <section class="tab-panel" data-panel="workingday">
      <h3>Working days versus days off</h3>
      <div class="chart-card">
        <svg class="chart" id="chart-workingday" viewBox="0 0 720 280" role="img" aria-label="Working day totals"></svg>
      </div>
    </section>

    <section class="tab-panel" data-panel="hours">
      <h3>Busiest and quietest hours</h3>
      <div class="chart-card">
        <svg class="chart" id="chart-hours" viewBox="0 0 720 560" style="height: 560px" role="img" aria-label="Hour totals"></svg>
      </div>
      <div class="chart-card">
        <h4>Average rentals per hour by season (all dates)</h4>
        <svg class="chart" id="chart-profile-season" viewBox="0 0 720 280" role="img" aria-label="Hourly profile by season"></svg>
        <div class="legend" id="legend-profile-season"></div>
      </div>
      <div class="chart-card">
        <h4>Average rentals per hour by weather (all dates)</h4>
        <svg class="chart" id="chart-profile-weather" viewBox="0 0 720 280" role="img" aria-label="Hourly profile by weather"></svg>
        <div class="legend" id="legend-profile-weather"></div>
      </div>
      <div class="chart-card">
        <h4>Average rentals per hour by working day (all dates)</h4>
        <svg class="chart" id="chart-profile-workingday" viewBox="0 0 720 280" role="img" aria-label="Hourly profile by working day"></svg>
        <div class="legend" id="legend-profile-workingday"></div>
      </div>
    </section>

    <section class="tab-panel" data-panel="seasons">
      <h3>Usage across seasons</h3>
      <div class="chart-card">
        <svg class="chart" id="chart-seasons" viewBox="0 0 720 280" role="img" aria-label="Season totals"></svg>
      </div>
    </section>

    <section class="tab-panel" data-panel="weather">
      <h3>Usage across weather conditions</h3>
      <div class="chart-card">
        <svg class="chart" id="chart-weather" viewBox="0 0 720 280" role="img" aria-label="Weather totals"></svg>
      </div>
    </section>

    <section class="tab-panel" data-panel="conclusion">
      <h3>Conclusion</h3>
      <ol class="prose" id="conclusions"></ol>
    </section>

    <div class="status" id="status"></div>
    <p class="caption">Hourly profiles use the full dataset; every other view follows the selected date range.</p>
  </main>

  <script>
    const MIN_DATE = '{{MIN_DATE}}';
    const MAX_DATE = '{{MAX_DATE}}';
    const PALETTE = ['#5f9ea0', '#2f4858', '#f6ae2d', '#ff6b4a', '#7fffd4', '#86bbd8'];

    const startEl = document.getElementById('start');
    const endEl = document.getElementById('end');
    const statusEl = document.getElementById('status');
    const rangeLabelEl = document.getElementById('range-label');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = Array.from(document.querySelectorAll('.tab-panel'));

    let requestId = 0;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatCount = (value) => Number(value).toLocaleString('en-US');

    const formatAxisValue = (value) => {
      if (Math.abs(value) >= 1000000) {
        return `${(value / 1000000).toFixed(1)}M`;
      }
      if (Math.abs(value) >= 1000) {
        return `${(value / 1000).toFixed(1)}k`;
      }
      return Math.round(value).toString();
    };

    const hourLabel = (hour) => `${String(hour).padStart(2, '0')}:00`;

    const noData = (svg) => {
      svg.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data for this range</text>';
    };

    const viewSize = (svg) => {
      const box = svg.viewBox.baseVal;
      return { width: box.width, height: box.height };
    };

    const yGrid = (max, paddingX, width, y) => {
      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatAxisValue(value)}</text>`;
      }
      return grid;
    };

    const renderLines = (svg, series, labels) => {
      if (!series.length || !labels.length) {
        noData(svg);
        return;
      }
      const { width, height } = viewSize(svg);
      const paddingX = 52;
      const paddingY = 34;
      const top = 20;

      let max = 0;
      series.forEach((line) => line.values.forEach((value) => {
        if (value !== null && value > max) {
          max = value;
        }
      }));
      if (max === 0) {
        max = 1;
      }

      const xStep = labels.length > 1 ? (width - paddingX * 2) / (labels.length - 1) : 0;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value / max) * (height - top - paddingY);

      let body = yGrid(max, paddingX, width, y);
      series.forEach((line) => {
        let path = '';
        let pen = 'M';
        line.values.forEach((value, index) => {
          if (value === null) {
            pen = 'M';
            return;
          }
          path += `${pen} ${x(index).toFixed(2)} ${y(value).toFixed(2)} `;
          pen = 'L';
        });
        body += `<path class="chart-line" style="stroke: ${line.color}" d="${path}" />`;
        if (labels.length <= 40) {
          line.values.forEach((value, index) => {
            if (value !== null) {
              body += `<circle class="chart-point" style="stroke: ${line.color}" cx="${x(index)}" cy="${y(value)}" r="3" />`;
            }
          });
        }
      });

      const labelEvery = Math.max(1, Math.ceil(labels.length / 12));
      labels.forEach((label, index) => {
        if (index % labelEvery === 0) {
          body += `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${label}</text>`;
        }
      });

      svg.innerHTML = body;
    };

    const renderColumns = (svg, items) => {
      if (!items.length) {
        noData(svg);
        return;
      }
      const { width, height } = viewSize(svg);
      const paddingX = 52;
      const paddingY = 34;
      const top = 24;
      const max = Math.max(1, ...items.map((item) => item.value));
      const slot = (width - paddingX * 2) / items.length;
      const barWidth = Math.min(90, slot * 0.6);
      const y = (value) => height - paddingY - (value / max) * (height - top - paddingY);

      let body = yGrid(max, paddingX, width, y);
      items.forEach((item, index) => {
        const cx = paddingX + slot * index + slot / 2;
        const yPos = y(item.value);
        const color = PALETTE[index % PALETTE.length];
        body += `<rect x="${cx - barWidth / 2}" y="${yPos}" width="${barWidth}" height="${height - paddingY - yPos}" rx="6" fill="${color}" />`;
        body += `<text class="chart-value" x="${cx}" y="${yPos - 6}" text-anchor="middle">${formatAxisValue(item.value)}</text>`;
        body += `<text class="chart-label" x="${cx}" y="${height - paddingY + 18}" text-anchor="middle">${item.label}</text>`;
      });
      svg.innerHTML = body;
    };

    const renderRows = (svg, items) => {
      if (!items.length) {
        noData(svg);
        return;
      }
      const { width, height } = viewSize(svg);
      const left = 60;
      const right = 60;
      const top = 10;
      const rowHeight = (height - top * 2) / items.length;
      const max = Math.max(1, ...items.map((item) => item.value));
      const scale = (width - left - right) / max;

      let body = '';
      items.forEach((item, index) => {
        const yPos = top + rowHeight * index;
        const barWidth = item.value * scale;
        const emphasised = index === 0 || index === items.length - 1;
        const color = emphasised ? PALETTE[0] : PALETTE[4];
        body += `<text class="chart-label" x="${left - 8}" y="${yPos + rowHeight * 0.65}" text-anchor="end">${item.label}</text>`;
        body += `<rect x="${left}" y="${yPos + rowHeight * 0.15}" width="${barWidth}" height="${rowHeight * 0.7}" rx="4" fill="${color}" />`;
        body += `<text class="chart-value" x="${left + barWidth + 6}" y="${yPos + rowHeight * 0.65}">${formatAxisValue(item.value)}</text>`;
      });
      svg.innerHTML = body;
    };

    const renderDonut = (svg, legendEl, slices) => {
      legendEl.innerHTML = '';
      const sum = slices.reduce((acc, slice) => acc + slice.count, 0);
      if (!slices.length || sum === 0) {
        noData(svg);
        return;
      }
      const { width, height } = viewSize(svg);
      const cx = width / 2;
      const cy = height / 2;
      const outer = Math.min(width, height) / 2 - 16;
      const inner = outer * 0.6;
      const colors = [PALETTE[0], PALETTE[4]];

      let angle = -Math.PI / 2;
      let body = '';
      slices.forEach((slice, index) => {
        const sweep = (slice.count / sum) * Math.PI * 2;
        const color = colors[index % colors.length];
        if (sweep >= Math.PI * 2 - 1e-6) {
          body += `<circle cx="${cx}" cy="${cy}" r="${(outer + inner) / 2}" fill="none" stroke="${color}" stroke-width="${outer - inner}" />`;
        } else if (sweep > 0) {
          const end = angle + sweep;
          const large = sweep > Math.PI ? 1 : 0;
          const p = (r, a) => `${(cx + r * Math.cos(a)).toFixed(2)} ${(cy + r * Math.sin(a)).toFixed(2)}`;
          body += `<path fill="${color}" d="M ${p(outer, angle)} A ${outer} ${outer} 0 ${large} 1 ${p(outer, end)} L ${p(inner, end)} A ${inner} ${inner} 0 ${large} 0 ${p(inner, angle)} Z" />`;
          const mid = angle + sweep / 2;
          const labelRadius = (outer + inner) / 2;
          body += `<text class="chart-value" x="${cx + labelRadius * Math.cos(mid)}" y="${cy + labelRadius * Math.sin(mid) + 4}" text-anchor="middle">${slice.share.toFixed(1)}%</text>`;
          angle = end;
        }
        const entry = document.createElement('span');
        entry.style.setProperty('--swatch', color);
        entry.textContent = `${slice.label}: ${formatCount(slice.count)}`;
        legendEl.appendChild(entry);
      });
      svg.innerHTML = body;
    };

    const renderProfile = (svg, legendEl, profile) => {
      legendEl.innerHTML = '';
      const hours = Array.from({ length: 24 }, (_, hour) => hour);
      const series = profile.map((line, index) => {
        const byHour = new Map(line.points.map((point) => [point.hour, point.mean_total]));
        const color = PALETTE[index % PALETTE.length];
        const entry = document.createElement('span');
        entry.style.setProperty('--swatch', color);
        entry.textContent = line.category;
        legendEl.appendChild(entry);
        return { color, values: hours.map((hour) => (byHour.has(hour) ? byHour.get(hour) : null)) };
      });
      renderLines(svg, series, hours.map((hour) => String(hour).padStart(2, '0')));
    };

    const toItems = (groups, label) => groups.map((group) => ({ label: label(group.key), value: group.total }));

    const renderConclusions = (data) => {
      const list = document.getElementById('conclusions');
      list.innerHTML = '';
      const add = (text) => {
        const item = document.createElement('li');
        item.textContent = text;
        list.appendChild(item);
      };
      if (!data.record_count) {
        add('No rentals fall inside the selected range.');
        return;
      }
      const [casual, registered] = data.user_split;
      add(`Registered members account for ${registered.share.toFixed(1)}% of rentals against ${casual.share.toFixed(1)}% for casual riders.`);
      const workday = data.by_workingday;
      if (workday.length > 1) {
        add(`${workday[0].key} has more rentals (${formatCount(workday[0].total)}) than ${workday[workday.length - 1].key} (${formatCount(workday[workday.length - 1].total)}).`);
      } else {
        add(`Only ${workday[0].key} periods appear in this range.`);
      }
      const hours = data.by_hour;
      add(`${hourLabel(hours[0].key)} is the busiest hour and ${hourLabel(hours[hours.length - 1].key)} the quietest.`);
      const seasons = data.by_season;
      add(`${seasons[0].key} is the busiest season and ${seasons[seasons.length - 1].key} the quietest.`);
      const weather = data.by_weather;
      add(`${weather[0].key} weather sees the most rentals and ${weather[weather.length - 1].key} the fewest.`);
    };

    const renderDashboard = (data) => {
      rangeLabelEl.textContent = `${data.range.start} to ${data.range.end}: ${formatCount(data.record_count)} records.`;
      document.getElementById('metric-registered').textContent = formatCount(data.totals.registered);
      document.getElementById('metric-casual').textContent = formatCount(data.totals.casual);
      document.getElementById('metric-total').textContent = formatCount(data.totals.total);

      renderLines(
        document.getElementById('chart-daily'),
        [{ color: 'var(--line)', values: data.daily.map((day) => day.total) }],
        data.daily.map((day) => day.key.slice(2))
      );
      renderDonut(document.getElementById('chart-split'), document.getElementById('legend-split'), data.user_split);
      renderColumns(document.getElementById('chart-workingday'), toItems(data.by_workingday, String));
      renderRows(document.getElementById('chart-hours'), toItems(data.by_hour, hourLabel));
      renderColumns(document.getElementById('chart-seasons'), toItems(data.by_season, String));
      renderColumns(document.getElementById('chart-weather'), toItems(data.by_weather, String));
      renderConclusions(data);
    };

    const loadDashboard = async () => {
      const id = ++requestId;
      const params = new URLSearchParams({ start: startEl.value, end: endEl.value });
      const res = await fetch(`/api/dashboard?${params}`);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Unable to load dashboard');
      }
      const data = await res.json();
      if (id === requestId) {
        renderDashboard(data);
        setStatus('', '');
      }
    };

    const loadProfiles = async () => {
      const res = await fetch('/api/profiles');
      if (!res.ok) {
        throw new Error('Unable to load hourly profiles');
      }
      const data = await res.json();
      renderProfile(document.getElementById('chart-profile-season'), document.getElementById('legend-profile-season'), data.by_season);
      renderProfile(document.getElementById('chart-profile-weather'), document.getElementById('legend-profile-weather'), data.by_weather);
      renderProfile(document.getElementById('chart-profile-workingday'), document.getElementById('legend-profile-workingday'), data.by_workingday);
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panels.forEach((panel) => panel.classList.toggle('active', panel.dataset.panel === tab));
    };

    const onRangeChange = () => {
      if (startEl.value && endEl.value && startEl.value > endEl.value) {
        setStatus('Start date is after end date; nothing selected.', 'error');
      }
      loadDashboard().catch((err) => setStatus(err.message, 'error'));
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    startEl.addEventListener('change', onRangeChange);
    endEl.addEventListener('change', onRangeChange);

    document.getElementById('reset').addEventListener('click', () => {
      startEl.value = MIN_DATE;
      endEl.value = MAX_DATE;
      onRangeChange();
    });

    loadDashboard().catch((err) => setStatus(err.message, 'error'));
    loadProfiles().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn page_carries_date_bounds() {
        let bounds = DateRange::new(
            NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2012, 12, 31).unwrap(),
        );
        let html = render_index(bounds);
        assert!(html.contains(r#"min="2011-01-01" max="2012-12-31" value="2011-01-01""#));
        assert!(html.contains(r#"value="2012-12-31""#));
        assert!(!html.contains("{{"));
    }
}
